//! VSOP87C series for Jupiter: heliocentric X, Y, Z on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const X0: &[Term] = &[
    [5.19591755961, 0.599546722, 529.9347825781],
    [0.37839498798, 3.39164799011, 0.2438174835],
    [0.12593400247, 0.94916456487, 1059.6257476727],
    [0.01504469362, 0.72934997067, 522.8212355773],
    [0.01476016965, 3.61748058581, 537.0483295789],
    [0.00457751771, 1.29886948102, 1589.3167127673],
    [0.00301186623, 5.17699571796, 7.3573644843],
    [0.00381996183, 1.98605213956, 102.84895673509],
    [0.00193179179, 5.02674864982, 426.8420083595],
    [0.00148291722, 6.15618324076, 110.45013870291],
    [0.001421714, 5.56556633177, 633.0275567967],
    [0.00133443745, 0.89287673636, 213.5429129215],
    [0.0010271945, 6.17016418155, 1052.51220067191],
    [0.00087327523, 6.27541436099, 529.44714761109],
    [0.00114122292, 0.01655163411, 1162.7185218913],
    [0.00072093376, 3.9612286107, 1066.7392946735],
    [0.00059268404, 4.46187501371, 949.4194264533],
    [0.00068329094, 3.4383377105, 846.3266522347],
    [0.00030209026, 2.97106959244, 205.9417309537],
    [0.00034007392, 1.74694593876, 419.2408263917],
    [0.00026616582, 4.85226363695, 323.74923414091],
    [0.00019727427, 1.64894896707, 2119.00767786191],
    [0.0001774954, 0.84241151614, 419.72846135871],
    [0.00017560618, 1.9551177172, 316.6356871401],
    [0.00016308761, 5.73600933766, 736.1203310153],
    [0.00016227856, 0.86857414313, 515.70768857651],
    [0.00014406626, 2.06284119096, 743.23387801611],
    [0.00011421526, 3.48157539864, 544.1618765797],
    [0.00010835166, 3.19395745172, 103.3365917021],
    [0.00012154356, 3.75230765024, 526.00262931501],
    [0.00011992571, 0.5850865737, 533.8669358412],
    [0.00008455662, 3.47881139969, 640.1411037975],
    [0.00008193182, 5.57030621208, 1479.11039154791],
    [0.00008713455, 0.38315206501, 1692.40948698591],
    [0.00007420814, 5.98301259011, 956.53297345411],
    [0.00007565993, 0.90590258528, 1265.81129610991],
    [0.00008202922, 1.41656499571, 735.6326960483],
    [0.00007717111, 0.13134820979, 1582.2031657665],
    [0.00005320837, 1.10497796931, 526.7533888404],
    [0.00005217759, 3.23246701096, 533.1161763158],
    [0.00005238212, 3.11227009303, 522.3336006103],
    [0.00005774716, 5.03860697265, 14.47091148511],
    [0.00005907614, 4.9831967471, 109.9625037359],
    [0.00004575512, 3.7563899333, 1376.0176173293],
    [0.0000393987, 4.30901425634, 1596.43025976811],
    [0.00004568269, 2.14654320251, 95.7354097343],
    [0.00003036375, 3.9449295479, 309.0345051723],
    [0.00002856672, 6.01338099597, 117.5636857037],
    [0.00002820138, 5.2651555694, 632.5399218297],
    [0.00002442859, 4.24056243704, 433.9555553603],
    [0.00002534517, 6.18089912855, 625.9140097959],
    [0.00002329307, 5.93999996459, 213.0552779545],
    [0.00002430903, 3.89413393897, 220.6564599223],
    [0.00002673686, 3.18830432379, 1169.83206889211],
    [0.00002396896, 5.93300784335, 1045.3986536711],
    [0.00002503065, 1.15446452871, 1052.02456570489],
    [0.00001817118, 2.38828009078, 838.72547026689],
    [0.00002014206, 0.16819149452, 1155.6049748905],
    [0.00001501452, 4.60588864812, 942.3058794525],
    [0.00001454916, 5.75976807023, 853.4401992355],
    [0.00001628897, 5.49183726268, 75.0254160508],
    [0.0000110676, 4.07652960629, 6.86972951729],
    [0.00001080777, 5.1518989496, 316.14805217309],
    [0.00001041755, 0.10701428561, 1795.5022612045],
    [0.00000996914, 3.08308908686, 1272.9248431107],
    [0.00000928877, 3.11398170655, 198.82818395289],
    [0.0000093449, 1.99952244525, 2648.6986429565],
    [0.00000858575, 3.71317000991, 529.88659846831],
    [0.00000858481, 0.62779584572, 529.9829666879],
    [0.00001088006, 1.13420142953, 527.4871020233],
    [0.00001080077, 3.20528251357, 532.3824631329],
    [0.00000958229, 1.34776425757, 149.8070146181],
    [0.00000830762, 3.68869745476, 625.42637482889],
    [0.00000815889, 0.09783778677, 1059.1381127057],
    [0.00000838684, 4.25222669612, 3.6883357796],
    [0.00000956674, 5.34413307275, 379.8839504765],
    [0.00000694759, 2.12065531862, 1155.1173399235],
    [0.00000673874, 6.09243781947, 2008.8013566425],
    [0.00000865777, 4.81335091362, 426.3543733925],
    [0.0000089773, 0.9100751266, 1368.4164353615],
    [0.00000667422, 1.95480301512, 1368.9040703285],
    [0.00000747747, 4.71007343847, 330.8627811417],
    [0.0000069362, 1.33864708601, 1063.55790093581],
    [0.00000787813, 0.40190120466, 839.2131052339],
    [0.00000614978, 0.12549858875, 2111.8941308611],
    [0.00000680352, 0.29385269041, 528.9715747316],
    [0.00000678592, 4.04690202, 530.89799042461],
    [0.0000057413, 0.74562235425, 2222.1004520805],
    [0.00000644748, 1.92762797797, 412.12727939089],
    [0.00000742423, 3.9598614874, 206.42936592071],
    [0.00000563602, 4.06358227588, 1055.6935944096],
    [0.00000559331, 5.87731196423, 729.0067840145],
    [0.00000647539, 5.12542038621, 984.8441491054],
    [0.00000460071, 3.8265470791, 1073.85284167431],
    [0.0000040327, 0.99319532178, 412.6149143579],
    [0.00000539827, 5.31630620093, 38.3768531213],
    [0.00000407824, 2.98828635038, 910.0625505381],
    [0.00000319575, 3.35886072316, 941.8182444855],
    [0.00000301187, 4.06443054226, 1905.70858242391],
    [0.00000330186, 3.60882237102, 948.9317914863],
    [0.00000334161, 0.95340181567, 76.50988875911],
    [0.00000292241, 1.85350584256, 1471.50920958009],
    [0.0000038896, 6.06054382912, 604.7163811454],
    [0.00000387023, 4.52724734369, 455.1531840108],
    [0.0000030353, 5.06433323115, 529.4135177163],
    [0.00000303139, 5.5595671258, 530.45604743991],
    [0.00000276704, 0.65474572491, 1486.2239385487],
    [0.00000383222, 4.89517559942, 3.42521122121],
    [0.00000267964, 2.0143825905, 309.5221401393],
    [0.00000270827, 1.04116519472, 1258.6977491091],
    [0.00000264824, 2.9476626178, 536.5606946119],
    [0.00000342262, 0.65840844301, 1684.80830501809],
    [0.00000254392, 3.5846949133, 1062.80714141041],
    [0.00000289891, 4.38886336303, 742.74624304909],
    [0.00000227013, 4.65796948353, 2126.1212248627],
    [0.00000219942, 3.05429299635, 515.2200536095],
    [0.00000304124, 1.75362149529, 6283.3196674749],
    [0.0000028959, 2.97007145679, 305.10235190919],
    [0.00000225217, 3.50147007971, 1699.5230339867],
    [0.00000192734, 1.02002841562, 508.5941415757],
    [0.00000181955, 0.77882678658, 1898.5950354231],
    [0.00000180824, 2.76562890852, 1265.32366114289],
    [0.00000234431, 0.9236342146, 1056.444353935],
    [0.00000210412, 4.02038896426, 490.5779066629],
    [0.0000017896, 6.1015436021, 527.01402127131],
    [0.00000184077, 5.59641213885, 1471.9968445471],
    [0.00000177005, 4.52323003424, 532.8555438849],
    [0.00000197754, 6.22787965841, 1575.08961876571],
    [0.00000201548, 1.60035448064, 728.5191490475],
    [0.00000164871, 3.47686660224, 529.1840230527],
    [0.00000164585, 0.86380543039, 530.68554210351],
    [0.00000191757, 0.30748865043, 569.29165849331],
    [0.00000155012, 1.25790672042, 519.63984183961],
    [0.00000216423, 5.68405931071, 453.1810763355],
    [0.0000020827, 3.39324145545, 1439.75351563271],
    [0.00000195461, 0.6978004231, 1685.2959399851],
    [0.00000158021, 4.32825610392, 525.7419968841],
    [0.00000155478, 0.01448171646, 534.1275682721],
    [0.00000142916, 2.35979415786, 11.2895177474],
    [0.00000166137, 3.66026536347, 224.5886131854],
    [0.00000139568, 3.3557567615, 647.25465079831],
    [0.00000194718, 5.30500289646, 1021.49271203491],
    [0.00000142687, 3.0639895884, 1258.21011414209],
    [0.00000136501, 6.00364083075, 99.40443843901],
    [0.00000155156, 5.30496926203, 845.8390172677],
    [0.00000148749, 4.08138644957, 301.9209581715],
    [0.00000142483, 3.7568548713, 227.77000692311],
    [0.00000128042, 5.39609470815, 1162.23088692429],
    [0.00000129196, 1.58923571595, 1787.9010792367],
    [0.00000176884, 3.17597373171, 10213.5293636945],
    [0.00000120579, 3.0829997831, 540.2297233166],
    [0.00000163945, 2.012481976, 1.7282901918],
    [0.00000135003, 3.79885672041, 540.98048284201],
    [0.00000121846, 3.78904805348, 524.3057082856],
    [0.00000120032, 0.55319497448, 535.56385687061],
    [0.00000124238, 3.38846678226, 983.3596763971],
    [0.00000123682, 3.34428700111, 525.26891613211],
    [0.0000010443, 0.57516865787, 530.0948412725],
    [0.0000010443, 3.7655169905, 529.7747238837],
    [0.00000136458, 0.41278945595, 2001.2001746747],
    [0.00000115988, 3.35547392183, 750.3474250169],
    [0.00000104731, 3.32722729895, 551.27542358051],
    [0.00000100945, 2.35927152342, 1581.7155307995],
    [0.00000116158, 0.99764725383, 534.6006490241],
    [0.00000122805, 4.90630450089, 524.5181566067],
    [0.00000103104, 4.41419723891, 963.6465204549],
    [0.00000115142, 0.31814375241, 2325.1932262991],
    [0.00000120928, 5.71584928874, 535.35140854951],
    [0.00000094293, 3.2439357288, 1802.6158082053],
    [0.00000092521, 0.02282195426, 1383.13116433011],
    [0.00000085964, 2.5390525359, 831.6119232661],
    [0.00000091882, 3.03470202176, 441.06910236111],
    [0.00000090884, 2.64222941727, 4.1759707466],
    [0.00000096153, 4.8867806324, 21.5844584859],
    [0.00000073111, 5.81311465775, 415.7963080956],
    [0.00000072096, 0.31807246212, 529.72233425701],
    [0.00000072096, 4.02261318625, 530.1472308992],
    [0.00000095408, 5.93750222727, 35.6685401356],
    [0.00000079513, 0.68230348252, 835.28095197081],
    [0.00000068517, 2.77354883412, 1574.6019837987],
    [0.00000069848, 0.27519157939, 518.8890823142],
    [0.00000073288, 0.5510743124, 832.0995582331],
    [0.0000007379, 1.37824862036, 1044.9110187041],
    [0.00000062635, 0.34734323123, 2214.98690507971],
    [0.00000072372, 5.6498781159, 511.7755353134],
    [0.00000079774, 1.04707348735, 618.8004627951],
    [0.00000084465, 0.44987072707, 834.7933170038],
    [0.00000082357, 2.58250672354, 531.4192552864],
    [0.00000068826, 4.98304145215, 548.0940298428],
    [0.00000058994, 1.32874569406, 2104.2929488933],
    [0.0000006976, 5.12306055524, 98.91680347199],
    [0.00000074013, 4.4191116951, 174.1860370063],
    [0.0000005568, 4.79831502417, 644.0732570606],
    [0.00000077878, 1.73526543836, 528.4503098698],
    [0.00000054479, 2.02247283767, 1898.10740045609],
    [0.00000055045, 2.14129882164, 639.6534688305],
    [0.00000053073, 1.97157293394, 1048.58004740881],
    [0.00000052282, 4.6200817559, 960.4651267172],
    [0.0000005156, 1.64669753295, 514.95692905111],
    [0.00000052703, 0.3028903055, 2641.5850959557],
    [0.00000066188, 0.59773291524, 230.3207533419],
    [0.00000049711, 2.69410394468, 544.9126361051],
    [0.00000049029, 3.17600907963, 387.4851324443],
    [0.0000006596, 1.03002405667, 1364.9719170654],
    [0.00000052715, 1.48379190348, 1057.1780671179],
    [0.00000058796, 4.35893030098, 39.1130584317],
    [0.00000059809, 0.66614084819, 91.8032564712],
    [0.00000046231, 0.2545965769, 2538.4923217371],
    [0.00000048382, 5.62148696439, 2428.2860005177],
    [0.0000006007, 3.77993719329, 1062.0734282275],
    [0.00000056428, 0.17441147343, 2317.5920443313],
    [0.00000059945, 0.89318521903, 494.510059926],
    [0.00000043719, 0.36566607858, 2.20386307129],
    [0.00000048181, 3.78650322165, 618.3128278281],
    [0.00000049751, 1.88142062033, 679.4979797127],
    [0.00000058551, 2.31298978175, 1058.14127496441],
    [0.00000047067, 2.3530994923, 3178.38960805111],
    [0.00000052897, 1.9485867237, 106.7811099982],
    [0.00000041687, 0.97719980018, 1059.67393178251],
    [0.00000041782, 3.4468619554, 71.09326278771],
    [0.00000043674, 1.21900999269, 430.7741616226],
    [0.00000044776, 4.88736591079, 312.70353387701],
    [0.00000048969, 5.94887655147, 1038.2851066703],
    [0.0000003853, 2.27809788058, 1148.00379292269],
    [0.00000052006, 3.46735017105, 565.35950523021],
    [0.00000047878, 3.92919910061, 1375.52998236229],
    [0.00000038108, 0.29006450181, 1788.38871420371],
    [0.00000049073, 4.15252949988, 523.7844434238],
    [0.00000038297, 5.94013989158, 106.5179854398],
    [0.00000041687, 4.06257397973, 1059.5775635629],
    [0.00000037366, 1.12685707466, 2751.79141717511],
    [0.00000041634, 4.80654439187, 1478.62275658089],
    [0.00000041532, 5.44681505603, 1514.5351142],
    [0.00000041308, 4.63852007603, 10.538758222],
    [0.00000040633, 0.18959097751, 18.40306474821],
    [0.000000428, 0.1131289278, 113.89465699899],
    [0.00000048985, 6.20232924224, 3340.8562441833],
    [0.00000044449, 0.1899990217, 536.08512173241],
    [0.00000034928, 1.15350567398, 672.3844327119],
    [0.00000036386, 2.02390109067, 1361.79052332771],
    [0.00000036844, 4.88632014089, 530.195415009],
    [0.00000036844, 5.73755081465, 529.6741501472],
    [0.00000034444, 2.48976796512, 1890.9938534553],
    [0.00000041479, 1.78003006526, 1593.2488660304],
    [0.00000046613, 3.74069024826, 1513.05064149171],
    [0.00000032971, 3.84810585282, 522.7730514675],
    [0.00000035418, 0.77769804196, 522.8694196871],
    [0.00000032742, 5.83069185951, 124.6772327045],
    [0.0000003485, 4.49564263533, 1060.5889555192],
    [0.00000030476, 4.38612921635, 1585.38455950421],
    [0.00000029011, 1.17948661211, 121.4958389668],
    [0.00000033477, 2.9718903045, 629.0954035336],
    [0.00000028909, 0.86697673022, 2001.68780964171],
    [0.00000029909, 3.55918762072, 537.0001454691],
    [0.00000027497, 0.49110595355, 537.09651368871],
    [0.00000028353, 1.7248723431, 2214.4992701127],
    [0.00000027748, 1.07211390256, 2420.68481854989],
    [0.00000033057, 6.08453905425, 568.0678182159],
    [0.00000027675, 5.33832022976, 528.6627581909],
    [0.00000029521, 1.16643867883, 1361.3028883607],
    [0.00000027586, 5.28550988684, 531.2068069653],
    [0.0000003393, 6.20456328242, 885.6835281499],
    [0.00000027514, 3.02979777846, 114.38229196601],
    [0.00000024495, 2.50371137844, 99.6675629974],
    [0.00000024344, 4.77377573492, 935.19233245171],
    [0.00000026492, 4.72075048576, 422.9098550964],
    [0.00000030581, 4.75568574212, 142.20583265029],
    [0.00000032993, 0.64338422669, 1058.66253982621],
    [0.00000026693, 5.7261433871, 747.1660312792],
    [0.00000023218, 3.10531480612, 216.9874312176],
    [0.00000031446, 0.08123535736, 437.8877086234],
    [0.0000002399, 5.67950841232, 523.3425004391],
    [0.00000025905, 1.13267038207, 10.8018827804],
    [0.00000030584, 4.71116923713, 1024.20102502061],
    [0.00000022355, 4.58469057077, 106.0303504728],
    [0.00000027098, 0.93569436946, 497.69145366371],
    [0.00000029688, 4.36436889437, 760.01171843649],
    [0.00000026696, 3.19374047498, 1158.78636862821],
    [0.00000025786, 5.76825883047, 636.95971005981],
    [0.00000024825, 0.15973617739, 1134.40734624],
    [0.0000002284, 2.4051432053, 459.0853372739],
    [0.0000002187, 4.9449009315, 536.52706471711],
    [0.00000022257, 0.47018335123, 521.8580277308],
    [0.00000026904, 6.12428331703, 299.37021175271],
    [0.00000020168, 6.20868850257, 2104.7805838603],
    [0.00000019591, 4.17431782455, 1603.5438067689],
    [0.00000023983, 6.22729049577, 2633.98391398789],
    [0.00000023778, 3.38484692408, 562.1781114925],
    [0.00000019633, 4.12778045809, 491.8017469403],
    [0.00000026288, 4.52163096435, 454.6655490438],
    [0.00000021128, 3.50042367011, 934.70469748469],
    [0.00000019074, 2.11128326565, 327.68138740401],
    [0.00000018465, 2.01761953412, 1464.3956625793],
    [0.0000002122, 0.04126742412, 495.9945326343],
    [0.00000024986, 5.13828768722, 860.55374623631],
    [0.00000018596, 2.14973780639, 5.872891776],
    [0.00000024136, 2.13158664025, 380.37158544351],
    [0.00000018303, 4.62800343377, 953.3515797164],
    [0.00000024099, 4.23660015333, 621.98185653281],
    [0.00000019533, 1.90765352683, 1098.9826235879],
    [0.00000017623, 2.20903684953, 2207.38572311189],
    [0.00000018076, 1.99926940915, 600.7842278823],
    [0.00000017281, 3.2838577837, 191.7146369521],
    [0.00000017873, 3.86678308802, 538.0115374254],
    [0.00000017226, 4.25912073762, 2435.3995475185],
    [0.00000021244, 0.0067862426, 1166.6506751544],
    [0.00000020337, 4.39625051286, 1795.0146262375],
    [0.00000016743, 0.09936960208, 2531.3787747363],
    [0.00000019199, 4.29791815751, 563.87503252191],
    [0.00000016833, 4.00808166209, 24.6228398717],
    [0.00000021175, 4.99199643071, 88.6218627335],
    [0.00000016556, 3.85103221392, 2229.2139990813],
    [0.00000016153, 0.18779034779, 1049.3308069342],
    [0.00000019785, 0.93062834115, 505.5557601899],
    [0.00000018422, 3.7532727532, 1969.4444807273],
    [0.00000019816, 3.66020647553, 96.2230447013],
    [0.00000016272, 3.90786214802, 527.22646959241],
    [0.0000001617, 0.43269809157, 532.64309556381],
    [0.0000001551, 0.9568664428, 988.7763023685],
    [0.00000015594, 4.85697058261, 39.6006933987],
    [0.00000015853, 3.02589971757, 501.62360692681],
    [0.00000016153, 0.61159863731, 31.9995114309],
    [0.00000018509, 3.4168180877, 554.31380496631],
    [0.00000015127, 3.55269023427, 460.7822583033],
    [0.00000016461, 2.78340595427, 220.16882495529],
    [0.00000019878, 3.75956771122, 1691.9218520189],
    [0.00000014712, 5.41386260565, 1059.10448281091],
    [0.00000017901, 3.55352098378, 107.2687449652],
    [0.00000014484, 4.85838274505, 1070.6714479366],
    [0.00000015909, 2.53709217872, 4.9096839295],
    [0.00000014674, 1.30453945233, 558.2459582294],
    [0.00000014766, 5.4530371713, 2744.6778701743],
    [0.00000018715, 0.73543610732, 523.71500745461],
    [0.00000014896, 6.07608976526, 1588.82907780029],
    [0.00000017816, 2.22215138151, 74.53778108379],
    [0.00000014616, 1.43483029983, 2530.8911397693],
    [0.00000018292, 4.9764948697, 1151.6728216274],
    [0.00000018426, 3.6052573137, 536.1545577016],
    [0.00000013673, 2.25783413626, 732.1881777522],
    [0.00000013765, 4.47849985236, 67.424234083],
    [0.00000014986, 1.65285454596, 2015.9149036433],
    [0.0000001375, 2.09723381259, 451.2210307477],
    [0.00000013701, 1.07017817726, 1586.13531902961],
    [0.00000013415, 0.81149327947, 2737.0766882065],
    [0.00000013707, 3.60868974559, 498.91529394111],
    [0.00000013957, 3.93496730766, 1592.498106505],
    [0.00000012833, 2.22104975837, 423.66061462181],
    [0.00000012935, 0.78943775071, 599.0873068529],
    [0.00000013524, 5.01956369633, 2655.8121899573],
    [0.00000015347, 3.07625567879, 323.2615991739],
    [0.0000001425, 3.29327530307, 462.2667310116],
    [0.00000014314, 5.6409842855, 1551.1836771295],
    [0.0000001635, 4.95142719083, 1290.19031849811],
    [0.00000012174, 0.91067652575, 2318.0796792983],
    [0.00000014758, 1.09361060094, 945.48727319021],
    [0.00000013727, 5.64051351782, 113.6315324406],
    [0.00000012014, 3.16779032587, 938.3737261894],
    [0.00000012669, 0.88657082206, 597.60283414461],
    [0.00000012684, 0.73280624012, 560.9542712151],
    [0.00000012686, 2.81489159967, 528.2378615487],
    [0.00000012686, 1.5257940487, 531.63170360751],
    [0.00000011902, 1.87001916874, 636.2089505344],
    [0.00000015029, 4.51212876715, 155.53915477459],
    [0.00000014712, 5.90909648144, 1060.1470125345],
    [0.00000013153, 5.81211132947, 34.1840674273],
    [0.00000011492, 1.17570579774, 0.719390363],
    [0.00000011728, 2.23882691795, 608.64853440851],
    [0.00000014802, 4.49062834163, 760.4993534035],
    [0.00000014208, 0.26437682229, 151.2914873264],
    [0.00000013247, 3.17700507895, 5.1728084879],
    [0.00000013608, 4.18261824771, 28.0673581678],
    [0.00000011186, 2.71818106129, 531.3710711766],
    [0.00000011186, 1.62250458708, 528.4984939796],
    [0.00000014801, 0.14206552505, 378.39947776819],
    [0.00000011873, 0.97351968238, 1677.6947580173],
    [0.00000010898, 6.16454751785, 629.846163059],
    [0.00000014422, 1.11940784009, 381.3684231848],
    [0.00000010799, 0.67317304481, 1148.49142788971],
    [0.00000010862, 4.63986010898, 248.9676355736],
    [0.00000010584, 4.42476612376, 430.02340209721],
    [0.0000001424, 4.58422194293, 1173.7642221552],
    [0.00000010278, 3.13159900994, 209.87388421679],
    [0.0000001128, 5.48473876275, 46.71424039951],
    [0.00000010327, 1.24113581631, 606.2008538537],
    [0.0000001327, 4.37719157411, 1041.466500408],
    [0.00000013786, 4.55090300929, 337.9763281425],
    [0.00000010252, 0.9265294844, 1891.4814884223],
    [0.00000013304, 5.56269483757, 63.49208081989],
    [0.00000009721, 0.53326540754, 1159.53712815361],
    [0.00000009974, 4.64682563136, 9.8050450391],
    [0.00000010564, 3.20765136591, 1251.0965671413],
    [0.00000012937, 0.9812195809, 944.7390057923],
    [0.00000012666, 6.06707633877, 721.8932370137],
    [0.00000009141, 1.74908467583, 1780.78753223589],
    [0.00000009377, 1.95219143915, 2523.7775927685],
    [0.00000008992, 2.62152527313, 1165.89991562901],
    [0.00000009074, 3.84732904999, 754.27957828001],
    [0.00000008886, 2.45050457262, 528.71094230071],
    [0.00000008886, 1.89018107575, 531.1586228555],
    [0.00000008815, 2.08073903214, 302.40859313851],
    [0.00000012114, 4.85216986598, 1020.2688717575],
    [0.00000008872, 1.62855962032, 194.89603068979],
    [0.00000010983, 5.00727208394, 1.24065522479],
    [0.0000001219, 6.14672657104, 72.31710306511],
    [0.00000008635, 0.16436387127, 1056.7049863659],
    [0.00000010308, 6.00917440923, 2950.3757836445],
    [0.00000011595, 1.86026762055, 1289.7026835311],
    [0.00000008931, 0.42213138869, 956.04533848709],
    [0.0000001079, 3.70406181805, 529.0410107008],
    [0.0000001079, 0.63662383032, 530.8285544554],
    [0.00000008192, 3.78940462638, 13.9832765181],
    [0.00000007989, 3.82641746989, 1058.87498814731],
    [0.00000010336, 3.40289007586, 73.5409433425],
    [0.00000008394, 2.58792157805, 525.7901809939],
    [0.00000010766, 3.9640075198, 2111.40649589409],
    [0.00000007749, 1.75600486693, 522.0704760519],
    [0.00000008309, 1.75332287431, 534.0793841623],
    [0.00000010415, 4.58881028655, 319.8170808778],
    [0.00000009365, 4.84977681203, 415.3086731286],
    [0.00000007601, 2.58490575206, 537.7990891043],
    [0.00000008635, 4.87197749696, 1062.5465089795],
    [0.00000007859, 0.3873435722, 1065.0423736441],
    [0.00000007602, 0.36299136019, 1063.8185333667],
    [0.00000010315, 3.38211998665, 456.6376567191],
    [0.00000007989, 1.21335631002, 1060.3765071981],
    [0.00000008083, 1.68073025462, 533.37930087419],
    [0.00000007529, 1.15606058501, 2847.28300942589],
    [0.0000000849, 5.93185778563, 202.0095776906],
    [0.00000007329, 5.32490948993, 148.32254190981],
    [0.00000007187, 4.26147498381, 30.7756711535],
    [0.00000009756, 3.52626213949, 2008.3137216755],
    [0.00000008727, 2.59290505793, 1202.0753978065],
    [0.00000007941, 3.50505477575, 2332.3067732999],
    [0.00000006801, 2.80122649992, 1054.9598812267],
    [0.00000008387, 5.9846740751, 2957.9769656123],
    [0.00000007512, 0.6438175106, 952.60082019101],
    [0.00000007552, 0.20225772775, 842.3944989716],
    [0.0000000768, 6.15861344699, 334.7949344048],
    [0.00000009231, 0.70359932145, 2854.8841913937],
    [0.00000008791, 1.10109597117, 483.4643596621],
    [0.00000007389, 2.29761310414, 202.4972126576],
    [0.00000006847, 2.25408688945, 320.5678404032],
    [0.00000008929, 0.96089681844, 603.23190843711],
    [0.0000000652, 0.54950232146, 3053.46855786309],
    [0.00000006721, 0.46202136795, 1912.8221294247],
    [0.00000008859, 3.82736358661, 217.4750661846],
    [0.0000000871, 3.26439990653, 576.4052054941],
    [0.00000007535, 3.00289317558, 1061.110220381],
    [0.00000006826, 2.18157664615, 284.39235822571],
    [0.00000006401, 4.64009991006, 117.0760507367],
    [0.00000006884, 5.25234540574, 277.2788112249],
    [0.00000006632, 6.1220665788, 2.9375762542],
    [0.00000007529, 1.69514413761, 423.17297965479],
    [0.00000006885, 4.98621366157, 946.23803271561],
    [0.000000062, 5.72324814885, 1272.4372081437],
    [0.0000000673, 2.20794164333, 531.5793139808],
    [0.0000000673, 2.13274400504, 528.29025117541],
    [0.00000006259, 5.74959705113, 142.6934676173],
    [0.00000007602, 4.67235401511, 1055.43296197871],
    [0.00000007329, 6.05862254648, 5.97595764],
    [0.00000005901, 1.2091333955, 1251.5842021083],
    [0.00000006013, 0.3950456784, 1035.24672528451],
    [0.00000005953, 4.5056579616, 498.4422131891],
    [0.00000007833, 4.37166198972, 68.90870679129],
    [0.00000006343, 2.74168510429, 199.3158189199],
    [0.00000005843, 0.90437055622, 1276.85699637381],
    [0.00000007666, 4.79082431872, 247.4831628653],
    [0.00000005663, 4.73243855855, 1091.86907658711],
    [0.00000005605, 2.83447163903, 513.4724563428],
    [0.00000005524, 6.17355324978, 2847.77064439291],
    [0.00000007612, 5.67631106398, 352.06040979221],
    [0.00000005914, 5.25663173098, 1054.20912170131],
    [0.00000007627, 1.64993486675, 405.5013673571],
    [0.00000005507, 6.11802918315, 561.4273519671],
    [0.00000005497, 5.9772213451, 810.90192958261],
    [0.00000005666, 1.34586791176, 1064.29161411871],
    [0.00000005378, 1.50621399976, 546.39710881341],
    [0.00000006319, 4.76637123715, 1493.3374855495],
    [0.00000006876, 0.37866209699, 408.19512612779],
    [0.00000005745, 5.91871265537, 430.2865266556],
    [0.00000006791, 4.05903259226, 303.6178792009],
    [0.00000007093, 5.9715014356, 740.0524842784],
    [0.00000006815, 3.11788100877, 1053.9966733802],
    [0.00000005111, 4.19087253985, 1176.9456158929],
    [0.00000005065, 4.11506105627, 1059.4656889783],
    [0.00000006697, 2.00713771131, 685.2301198692],
    [0.00000005674, 3.00549520381, 1567.48843679789],
    [0.00000005759, 2.6636618471, 166.58485503849],
    [0.00000004933, 5.71470503937, 245.2986068689],
    [0.00000005446, 3.42551680794, 757.4609720177],
    [0.00000005053, 1.65431850894, 1678.1823929843],
    [0.00000005999, 4.09275084512, 908.57807782981],
    [0.00000005382, 3.62538539878, 512.66930719071],
    [0.00000004943, 1.68108509143, 2840.1694624251],
    [0.00000005065, 0.92471272365, 1059.7858063671],
    [0.00000005075, 3.24596774005, 508.10650660869],
    [0.00000004955, 3.41906236842, 1069.92068841121],
    [0.00000005153, 0.71530024343, 547.2002579655],
    [0.00000004607, 0.55203312702, 2634.47154895491],
    [0.00000004755, 2.46962174787, 415.04804069769],
    [0.00000004775, 0.8258928341, 1994.08662767389],
    [0.0000000459, 1.48644692945, 2097.1794018925],
    [0.00000004911, 1.51731908389, 512.5262948388],
    [0.00000004553, 3.05075479447, 509.487913453],
    [0.00000004672, 3.60789441008, 234.8835539239],
    [0.00000004578, 0.86543502074, 305.5899868762],
    [0.00000005193, 4.02461886486, 320.0802054362],
    [0.00000006202, 4.38664626654, 26088.1469590577],
    [0.00000005852, 3.60701404156, 2427.7983655507],
    [0.00000004324, 1.28993084923, 550.3816517032],
    [0.0000000441, 2.4692134743, 1127.2937992392],
    [0.00000004238, 2.94796150753, 92.2908914382],
    [0.00000004881, 4.47400985269, 725.0746307514],
    [0.00000004688, 0.82987676346, 504.8050006645],
    [0.00000004432, 4.78229538893, 1490.15609181181],
    [0.00000004144, 3.2854058945, 970.7600674557],
    [0.00000005737, 4.94804445005, 707.809155364],
    [0.00000004256, 4.52622797251, 512.4086747598],
    [0.00000004139, 0.4414789523, 470.1310375378],
    [0.00000004547, 2.09665176175, 857.3723524986],
    [0.00000004431, 6.20712541641, 519.9004742705],
    [0.00000005723, 0.80521226018, 1065.2548219652],
    [0.00000004278, 2.08187064363, 739.30172475301],
    [0.00000005621, 3.19131378401, 280.723329521],
    [0.00000005007, 6.09093261803, 492.06237937121],
    [0.00000003987, 2.6345072984, 448.1826493619],
    [0.00000004559, 5.79888016601, 3266.76765330109],
    [0.00000004072, 5.22974977136, 3061.06973983091],
    [0.00000004072, 6.0976429821, 547.4608903964],
    [0.00000005087, 4.84521270183, 114.6429243969],
    [0.00000004392, 3.51029744842, 555.0645644917],
    [0.00000004733, 2.242176126, 1087.936923324],
    [0.0000000459, 5.53010211558, 209.12312469139],
    [0.00000004061, 2.41966232758, 1578.2710125034],
    [0.00000004043, 4.88146457506, 917.1760975389],
    [0.00000004781, 2.52650341453, 355.99256305531],
    [0.0000000384, 1.91188325761, 479.532206399],
    [0.00000004229, 3.44950557661, 202.760337216],
    [0.00000005079, 2.53028620261, 100.4012761803],
    [0.00000003809, 0.33163870572, 63.9797157869],
    [0.00000003869, 0.90238558045, 3163.6748790825],
    [0.00000004615, 5.431488248, 8.32057233081],
    [0.00000004615, 5.431488248, 7.83293736379],
    [0.00000004628, 4.53025832657, 567.807185785],
    [0.00000004429, 4.90564275884, 1025.6854977289],
    [0.00000004166, 2.66734467932, 1587.832240059],
    [0.00000004232, 4.10293029058, 2042.7416065863],
    [0.00000003934, 5.18155455773, 1894.66288216001],
    [0.00000004119, 5.42073132205, 782.59075393131],
    [0.00000004305, 4.04299412868, 237.9219353097],
    [0.00000004647, 4.25285731978, 294.80741117069],
    [0.00000003571, 3.65947756157, 1080.9663886751],
    [0.00000003908, 2.1698416143, 775.4772069305],
    [0.00000004183, 0.65593677894, 3171.2760610503],
    [0.00000003544, 5.95475674739, 849.5080459724],
    [0.00000004668, 2.13834164389, 391.4172857074],
    [0.00000003825, 5.15730861384, 1013.1553247567],
    [0.0000000449, 2.90215227898, 1066.2516597065],
    [0.00000003497, 4.37215725203, 1059.83819599381],
    [0.00000004592, 4.61227234774, 105.2966372899],
    [0.00000003507, 3.90043589953, 589.7385276184],
    [0.0000000346, 4.57095415442, 210.36151918381],
    [0.00000003472, 2.4280689394, 580.33735875721],
    [0.00000004742, 5.7828291274, 1214.92108496379],
    [0.00000004236, 4.52262475548, 458.5977023069],
    [0.00000004571, 3.28632828787, 2324.70559133209],
    [0.0000000368, 2.78358155559, 547.34327031741],
    [0.00000003342, 1.72110734407, 611.6869157943],
    [0.00000003327, 2.23284112556, 416.059432654],
    [0.00000003357, 2.00040904789, 102.8971408449],
    [0.00000003597, 5.41599821164, 81.50831573269],
    [0.00000003697, 4.35495083583, 326.9306278786],
    [0.00000003305, 0.91377513656, 3068.1832868317],
    [0.00000003332, 5.10225181759, 102.8007726253],
    [0.0000000385, 4.79682693839, 223.1041404771],
    [0.00000003389, 5.97871270107, 1050.0645201171],
    [0.00000003693, 3.8792874109, 100.8889111473],
    [0.0000000352, 4.33292989715, 355.50492808829],
    [0.00000003747, 1.69335109674, 101.88574888859],
    [0.00000003497, 0.66761652789, 1059.4132993516],
    [0.00000004041, 2.14362833723, 80.7575562073],
    [0.00000003215, 0.53534058688, 2207.8733580789],
    [0.0000000335, 5.33479503934, 1077.7849949374],
    [0.00000003628, 6.13897925009, 1567.9760717649],
    [0.00000004303, 2.23046220012, 374.15181032],
    [0.00000003455, 4.99170868278, 489.0934339546],
    [0.00000004402, 4.47863845219, 987.55246209111],
    [0.00000003638, 5.42646055999, 103.81216458159],
    [0.00000003112, 4.34851347009, 422.42222012939],
    [0.00000003124, 0.32512970919, 3369.8604275197],
    [0.00000003303, 4.4220485138, 539.96909088571],
    [0.00000003803, 2.07273212148, 852.9525642685],
    [0.00000003982, 0.94890253623, 986.3286218137],
    [0.00000003666, 3.00278414954, 77.9943614674],
    [0.00000004012, 2.19807079078, 668.4522794488],
    [0.00000003922, 2.56685919071, 1215.4087199308],
    [0.00000003967, 2.90360763886, 486.64575339981],
    [0.00000003197, 2.0794402987, 1169.34443392509],
    [0.00000003122, 5.3997874862, 69.3963417583],
    [0.00000003954, 3.61115285346, 1123.3616459761],
    [0.00000003201, 3.66652395167, 145.874861355],
    [0.00000003935, 1.80977709754, 306.58682461749],
    [0.00000002958, 4.65595664577, 531.9405201482],
    [0.00000002958, 5.96791430978, 527.929045008],
    [0.00000003054, 2.21604720422, 654.3681977991],
    [0.00000002909, 5.97782239901, 536.9364549943],
    [0.00000002909, 4.64604855654, 522.9331101619],
    [0.00000003738, 5.20971126454, 977.7306021046],
    [0.00000003893, 5.83257009844, 812.3864022909],
    [0.00000003604, 5.17763880188, 78.4699343469],
    [0.00000002867, 1.07832422526, 1269.743449373],
    [0.00000003118, 5.6321622764, 570.7761312016],
    [0.00000003676, 2.63995604671, 226.07308589371],
    [0.00000003463, 4.17288178571, 1591.76439332211],
    [0.0000000287, 1.83388013858, 1586.8690322125],
    [0.00000002889, 5.88273410848, 504.66198831261],
    [0.00000003107, 4.97048599434, 1905.2209474569],
    [0.00000002833, 5.34654613316, 911.5470232464],
    [0.00000003315, 4.08289970624, 1065.84552279621],
    [0.00000003556, 1.43723870007, 573.2238117564],
    [0.00000002918, 1.02389443723, 967.57867371801],
    [0.00000002676, 1.60354882374, 3281.4823822697],
    [0.00000003689, 3.27567307401, 850.25880549781],
    [0.00000003016, 5.84238370205, 3274.36883526891],
    [0.00000003204, 3.20846751019, 2744.1902352073],
    [0.00000002667, 0.77811362765, 97.9199657307],
    [0.00000002647, 2.4525722439, 134.8291610911],
    [0.00000002715, 4.74043154929, 555.2075768436],
    [0.00000003135, 1.58908870559, 433.46792039329],
    [0.00000002639, 3.83183781056, 144.39038864671],
    [0.00000002912, 2.70342002444, 1883.8803064545],
    [0.00000003601, 2.04225476495, 991.9576961062],
    [0.00000002745, 5.1130424481, 33.6964324603],
    [0.00000002589, 5.1551590113, 93.28772917949],
    [0.00000002531, 3.5288664753, 108.0024581481],
    [0.00000002821, 2.63736215369, 503.1080796351],
    [0.00000002585, 1.42843919503, 3156.5613320817],
    [0.00000003142, 1.28656971724, 520.37355502251],
    [0.00000003142, 6.19570189655, 539.4960101337],
    [0.00000002731, 4.37970098385, 537.16020416351],
    [0.00000002731, 6.2441699717, 522.7093609927],
    [0.00000003288, 2.11811777567, 685.7177548362],
    [0.00000002456, 3.04358904051, 1074.6036011997],
    [0.00000002382, 5.50759187807, 112.8978192577],
    [0.00000002385, 2.46238935625, 1475.1782382848],
    [0.00000002456, 1.99618473941, 1044.6478941457],
    [0.00000002435, 0.75544262993, 824.9860112323],
    [0.00000002637, 1.70331908888, 556.7614855211],
    [0.00000003031, 5.67687846191, 538.5328022872],
    [0.00000003031, 4.94699249364, 521.33676286901],
    [0.00000002342, 0.06228259686, 518.40144734719],
    [0.00000002443, 1.03845059435, 749.8597900499],
    [0.00000003226, 4.4499496841, 536.8358812578],
    [0.00000003226, 6.17392127144, 523.0336838984],
    [0.00000002356, 4.85533213884, 285.61619850311],
    [0.00000002452, 2.19107576775, 1090.6452363097],
    [0.00000002986, 4.62414537014, 491.3141119733],
    [0.00000002323, 0.16164499756, 530.56792202451],
    [0.00000002323, 4.17904065081, 529.3016431317],
    [0.00000003003, 3.08627097096, 108.96566599461],
    [0.00000003049, 4.48513403718, 1438.2690429244],
    [0.00000003159, 0.76092054251, 457.8614969965],
    [0.00000003023, 1.3994542018, 532.9037279947],
    [0.00000003023, 2.94123144657, 526.96583716151],
    [0.00000002581, 5.61581142863, 1483.042544811],
    [0.00000002851, 4.62796468589, 731.70054278519],
    [0.00000002627, 3.80975501995, 1095.0504703248],
    [0.00000002198, 1.26120223291, 2413.5712715491],
    [0.00000002533, 1.67483276763, 12566.3955174663],
    [0.00000002183, 6.04766236935, 2421.1724535169],
    [0.00000002273, 1.32684908668, 1589.3648968771],
    [0.00000002201, 5.72550531705, 2044.2260792946],
    [0.00000002304, 4.4134883281, 1053.47540851841],
    [0.00000002878, 2.85936483769, 28.5549931348],
    [0.00000002523, 6.18014679261, 909.5749155711],
    [0.00000002847, 5.46944309481, 1441.237988341],
    [0.00000002211, 0.29447557006, 376.4394321804],
    [0.00000002767, 1.11249816364, 39.86132582961],
    [0.00000002242, 0.27111162703, 6681.46867088311],
    [0.00000002284, 3.1419084922, 902.94900353731],
    [0.00000002122, 2.81881363812, 543.6742416127],
    [0.00000002251, 3.73285596763, 1067.70250252],
    [0.00000002782, 3.62990010057, 451.69660362719],
    [0.00000002107, 2.78853830817, 824.4983762653],
    [0.00000002308, 6.27924595004, 732.93893727761],
    [0.00000002055, 4.34456901846, 526.2657538734],
    [0.00000002624, 3.68204703869, 1261.8791428468],
    [0.00000002059, 5.93579199305, 1254.765595846],
    [0.00000002523, 5.46151498365, 372.77040347569],
    [0.00000002035, 5.20593524984, 535.7763051917],
    [0.00000002035, 5.41793570571, 524.09325996451],
    [0.00000002005, 3.9714268637, 843.145258497],
    [0.00000002366, 2.81479040414, 3708.0805731457],
    [0.00000001959, 2.33278855728, 163.1403367424],
    [0.00000002451, 1.41485691262, 739.5648493114],
    [0.00000002474, 2.3438049261, 2122.93983112501],
    [0.00000001935, 5.95122170645, 3164.1625140495],
    [0.00000002548, 2.30031435926, 1128.7782719475],
    [0.0000000214, 5.32310438264, 408.68276109481],
    [0.00000002089, 0.70684572014, 60.04756252381],
    [0.00000002555, 5.75500802854, 231.8052260502],
    [0.00000002289, 4.10142481033, 429.28968891431],
    [0.00000002652, 3.24034861472, 405.0137323901],
    [0.00000002044, 3.27128458744, 241.3664536058],
    [0.00000001959, 0.64242562063, 3480.06674873909],
    [0.0000000189, 1.30374554288, 501.4805945749],
    [0.00000002361, 2.60496924654, 1819.8812835927],
    [0.0000000229, 2.0766291, 386.9974974773],
    [0.00000001839, 1.47204895914, 511.2879003464],
    [0.00000001873, 2.16131201791, 1209.18894480731],
    [0.00000001837, 0.13057602825, 111.4133465494],
    [0.0000000251, 3.5654091541, 602.00806815971],
    [0.00000002186, 5.05661256477, 1553.8919901152],
    [0.00000001875, 4.96409845324, 1590.2799206138],
    [0.00000002325, 2.99238523654, 488.8809856335],
    [0.0000000196, 2.67757828738, 109.48693085641],
    [0.00000002511, 1.33963728695, 167.07249000551],
    [0.00000002012, 5.57171500563, 3583.1595229577],
    [0.00000002198, 2.81677718687, 297.9888049084],
    [0.00000002129, 0.30008608118, 821.94762984651],
    [0.00000002219, 3.10449171167, 2641.0974609887],
    [0.00000001954, 0.7850631367, 1415.3744932445],
    [0.00000001787, 5.23586420667, 1059.88638010361],
    [0.00000001933, 3.60934798531, 1688.4773337228],
    [0.00000002173, 0.53973434031, 1065.776086827],
    [0.00000002273, 4.41222326623, 1589.26852865751],
    [0.00000002311, 0.11223855924, 36.892380413],
    [0.00000002005, 5.77162207371, 746.67839631219],
    [0.00000001716, 4.22634329515, 504.0712874816],
    [0.0000000197, 4.25083421565, 363.1061100561],
    [0.00000001879, 1.53326034532, 1994.5742626409],
    [0.00000001715, 0.40254693953, 2950.8634186115],
    [0.00000001859, 4.76472866777, 2221.6128171135],
    [0.0000000176, 5.8114423735, 1051.5489928254],
    [0.00000001679, 0.73859095289, 2310.4784973305],
    [0.00000002127, 5.79555857294, 945.22664075931],
    [0.00000001827, 2.98105578454, 110.49832281271],
    [0.00000001954, 0.06688544879, 1446.8670626335],
    [0.00000002077, 0.12761917926, 724.5869957844],
    [0.00000002096, 1.34829485372, 570.98857952271],
    [0.00000001615, 0.93368590926, 1052.5603847817],
    [0.00000001608, 0.11434235358, 555.7982776746],
    [0.00000001681, 5.56771625121, 516.4414017594],
    [0.00000001681, 5.05615470433, 543.4281633968],
    [0.00000001618, 2.03312852847, 112.4101842907],
    [0.00000001962, 5.75393639029, 836.7654246791],
    [0.00000001962, 2.61234373671, 836.2777897121],
    [0.0000000162, 4.04601847199, 683.4301329758],
    [0.00000001551, 2.34280930104, 593.67068088151],
    [0.00000001819, 2.88219564243, 3060.5821048639],
    [0.00000001634, 4.46994256209, 56.3785338191],
    [0.00000001791, 0.1040989211, 502.8474472042],
    [0.00000002008, 2.52248957084, 487.3965129252],
    [0.00000001551, 6.21389515122, 3686.2522971763],
    [0.00000001511, 1.75866420206, 1518.46726746311],
    [0.0000000191, 1.68897371752, 228.83628063359],
    [0.00000001738, 0.70952679097, 1226.45442019471],
    [0.00000001471, 6.05957994367, 350.5759370839],
    [0.00000001466, 4.96867723168, 426.7938242497],
    [0.00000001636, 2.43292318068, 2200.2721761111],
    [0.0000000194, 3.42777184231, 1432.6399686319],
    [0.00000001484, 3.98627195351, 995.88984936931],
    [0.00000001673, 4.23658671292, 557.02211795201],
    [0.00000002009, 3.88072147559, 417.2807808039],
    [0.00000001573, 1.54985228466, 425.878800513],
    [0.00000001562, 1.17133703517, 416.547067621],
    [0.00000001419, 0.22434479279, 216.72430665921],
    [0.00000001787, 6.08709488043, 1059.3651152418],
    [0.000000016, 3.53298161884, 1268.9926898476],
    [0.00000001459, 1.86682228155, 426.8901924693],
    [0.0000000186, 0.59126369009, 1160.27084133651],
    [0.00000001409, 4.21180105945, 383.81610373959],
    [0.00000001599, 0.99304321709, 1588.3535049208],
    [0.00000001385, 1.96310882827, 466.1988842747],
    [0.00000001645, 0.25601088543, 630.5798762419],
    [0.00000001867, 3.30529498913, 1744.6120500584],
    [0.00000001796, 2.27749593221, 424.39432780471],
    [0.00000001802, 1.81980262725, 572.473052231],
    [0.00000001563, 5.91937041266, 312.21589891],
    [0.00000001811, 1.18645718578, 1340.5928946772],
    [0.00000001342, 2.5273502051, 849.7711705308],
    [0.00000001409, 1.19028163106, 3472.9532017383],
    [0.0000000134, 5.68788468184, 1058.3537232855],
    [0.00000001342, 5.03842872086, 3377.4616094875],
    [0.00000001764, 4.18037485648, 312.9666584354],
    [0.00000001801, 1.64093908538, 833.7964792625],
    [0.00000001801, 1.64093908538, 833.30884429549],
    [0.00000001504, 3.98849552736, 1052.46401656211],
    [0.00000001346, 0.84106067159, 1066.7874787833],
    [0.00000001711, 2.11130834468, 1363.48744435711],
    [0.00000001382, 3.43383168337, 24.1352049047],
    [0.00000001636, 0.25591141604, 422.64922266551],
    [0.00000001714, 2.66553451397, 1165.16620244611],
    [0.00000001547, 0.43253240963, 1097.7587833105],
    [0.00000001706, 0.40870999807, 1696.341640249],
    [0.00000001293, 2.98652787499, 394.5986794451],
    [0.00000001361, 0.44504530774, 1579.0217720288],
    [0.00000001329, 2.37930563293, 1628.6735886825],
    [0.00000001657, 2.95697828072, 473.31243127551],
    [0.00000001342, 0.89798927248, 827.67977000299],
    [0.00000001353, 4.1638557752, 2499.1354458219],
    [0.00000001322, 4.93972524369, 1464.8832975463],
    [0.00000001528, 0.29983648075, 138.76131435421],
    [0.00000001507, 4.31558459369, 774.98957196349],
    [0.00000001375, 3.98046179765, 1093.5659976165],
    [0.00000001393, 0.72013842017, 913.9947038012],
    [0.00000001302, 1.30247879244, 494.7225082471],
    [0.00000001266, 0.05484214471, 1162.7667060011],
    [0.00000001602, 3.9709176008, 611.1992808273],
    [0.00000001243, 5.45126497249, 561.6904765255],
    [0.00000001234, 1.89694179274, 436.4032359151],
    [0.00000001258, 3.15497421074, 1162.67033778151],
    [0.0000000149, 4.44362414485, 1468.06469128401],
    [0.00000001419, 3.11151373878, 1138.3394995031],
    [0.00000001394, 0.44413366244, 958.9806540089],
    [0.0000000129, 5.1572218879, 990.47322339791],
    [0.00000001199, 0.62664940478, 414.31183538731],
    [0.00000001364, 3.81523518368, 252.8997888367],
    [0.00000001494, 1.51661927481, 1485.7363035817],
    [0.00000001367, 1.47066835723, 527.9626749028],
    [0.00000001464, 3.90911748944, 1066.69111056371],
    [0.00000001248, 3.01032171032, 9.3174100721],
    [0.00000001194, 5.78008609111, 774.25336665311],
    [0.00000001328, 2.33133276999, 482.9767246951],
    [0.00000001176, 5.65248871466, 633.07574090651],
    [0.00000001352, 0.11794612755, 696.7634551001],
    [0.00000001235, 1.2943483744, 1027.3824187583],
    [0.00000001192, 3.03820680249, 565.1470569091],
    [0.00000001337, 5.1833137144, 427.805216206],
    [0.00000001581, 0.42492742452, 642.58878435231],
    [0.00000001186, 4.67061724657, 2115.0755245988],
    [0.00000001339, 6.03072294407, 1161.7553140448],
    [0.0000000126, 2.78492021778, 633.9907646432],
    [0.00000001309, 3.4808282913, 1163.6817297378],
    [0.00000001221, 4.50279420601, 2538.00468677009],
    [0.00000001133, 4.12042287083, 738.814089786],
    [0.00000001172, 2.47236884204, 632.9793726869],
    [0.0000000112, 4.59706955368, 709.29362807231],
    [0.0000000134, 5.63507440526, 1060.8977720599],
    [0.00000001126, 1.12456010627, 2729.96314120569],
    [0.00000001417, 0.94598908604, 1364.4842820984],
    [0.00000001112, 5.29416320994, 1066.2180298117],
    [0.00000001312, 1.35334544403, 981.8752036888],
    [0.00000001496, 5.90360357966, 388.70897272171],
    [0.00000001423, 1.37785950879, 586.5571338807],
    [0.00000001221, 3.63981220961, 269.6776292571],
    [0.00000001088, 1.29669383617, 1280.0383901115],
    [0.00000001089, 5.17675407458, 946.97174589851],
    [0.00000001132, 0.51083517505, 1664.09831133461],
    [0.00000001433, 2.05202099214, 635.4752373515],
    [0.00000001427, 2.97093867648, 597.11519917759],
    [0.00000001389, 4.08780249338, 636.47207509279],
    [0.00000001191, 5.09661092725, 1887.5493351592],
    [0.0000000142, 3.40607940834, 1140.1394863965],
    [0.0000000142, 0.26448675475, 1140.6271213635],
    [0.00000001082, 0.52075379881, 915.4791765095],
    [0.00000001134, 0.14574453315, 102.3276918733],
    [0.00000001061, 1.90789304117, 925.0404040651],
    [0.00000001302, 4.07370610626, 637.2203424907],
    [0.00000001036, 2.10557063879, 1798.68365494221],
    [0.0000000121, 1.65592259758, 31.73638687251],
    [0.0000000121, 1.65592259758, 31.24875190549],
    [0.00000001439, 3.0032418543, 244.0747665915],
    [0.0000000102, 2.05257171773, 732.45130231059],
    [0.00000001025, 0.81896733353, 951.86710700811],
    [0.00000001018, 2.44176419905, 623.4663292411],
    [0.00000001027, 0.61184452819, 1474.9176058539],
    [0.00000001114, 0.64613208093, 103.37022159689],
    [0.0000000104, 2.40824650249, 314.1880065853],
    [0.00000001371, 1.1369816396, 4590.6663630055],
    [0.00000001256, 3.34855371696, 73.0533083755],
    [0.00000001059, 5.69757951835, 3590.7607049255],
    [0.00000001008, 2.53682498993, 1140.8902459219],
    [0.00000001288, 5.39489850289, 2004.60857094851],
    [0.00000001033, 2.65742933066, 1028.6062590357],
    [0.00000001085, 3.7896604202, 395.34943897051],
    [0.00000000971, 1.34946807177, 665.27088571111],
    [0.00000001358, 4.62268264011, 448.9334088873],
    [0.0000000098, 3.55994269076, 961.94959942551],
    [0.00000000994, 0.40039858601, 3796.4586183957],
    [0.00000001202, 5.54033969791, 453.66871130251],
    [0.00000001028, 0.48891270332, 2524.2652277355],
    [0.0000000104, 5.47890663354, 170.51700830159],
    [0.00000000955, 3.71242781522, 645.5577297689],
    [0.00000001241, 4.39110413012, 1048.0924124418],
    [0.00000001076, 2.9728447979, 2957.48933064529],
    [0.0000000123, 2.33341924042, 1354.6769763269],
    [0.0000000124, 5.94758800259, 610.93615626891],
    [0.0000000124, 5.94758800259, 610.44852130189],
    [0.00000001022, 3.6958886708, 276.79117625789],
    [0.00000000924, 2.4198344065, 842.65762352999],
    [0.00000001083, 1.92054379034, 1901.7764291608],
    [0.00000001243, 4.71980053276, 671.1605924345],
    [0.00000001013, 2.54761722905, 3376.9739745205],
    [0.000000011, 5.92802097748, 1053.0334655337],
    [0.00000001099, 2.80854803975, 611.8299281462],
    [0.00000001099, 4.67370721199, 448.03963701001],
    [0.00000001033, 5.44055724404, 632.06434895021],
    [0.00000000957, 3.89598622213, 2965.09051261311],
    [0.0000000103, 3.34763414892, 1141.3778808889],
    [0.00000001196, 2.56247891942, 8520.87605922509],
    [0.00000000967, 0.19420587029, 829.0611768473],
    [0.00000001166, 1.680675162, 1511.5661687834],
    [0.00000001147, 5.62238808631, 1390.2447113309],
    [0.00000000873, 1.78825991988, 322.26476143261],
    [0.00000001137, 1.25214902883, 950.90389916161],
    [0.00000001201, 2.52928106613, 1436.2969352491],
    [0.00000000903, 0.04697695828, 1475.9289978102],
    [0.00000000858, 5.65232336931, 3480.5543837061],
    [0.00000001061, 5.43420240433, 1014.3791650341],
    [0.00000000852, 3.85820066843, 1305.16817202511],
    [0.00000001121, 3.79729993404, 2861.9977383945],
    [0.00000000978, 1.58128047477, 1262.6299023722],
    [0.00000000918, 3.86741534242, 341.01470952831],
    [0.00000000886, 2.01115688146, 1482.2917852856],
    [0.00000001153, 1.03307352866, 1055.95671896799],
    [0.00000001011, 2.13326219711, 1379.9497705924],
    [0.00000000844, 4.80951949791, 231.70216018621],
    [0.00000000939, 4.90771963793, 1703.4551872498],
    [0.00000001029, 2.73261618718, 2545.6058687379],
    [0.00000001042, 0.93684376629, 297.8857390444],
    [0.0000000117, 1.11117592168, 46.22660543249],
    [0.00000000962, 3.48479854663, 37.88921815429],
    [0.00000000877, 2.57722816875, 357.68948408471],
    [0.00000000988, 3.77368109282, 7211.1596359777],
    [0.00000000892, 5.41512877404, 1571.1574655026],
    [0.00000001109, 1.10719434979, 348.1282565291],
    [0.00000000827, 1.26246251342, 20956.5058750001],
    [0.00000000934, 3.64280443414, 525.514994348],
    [0.00000000914, 1.85188487603, 1031.3145720214],
    [0.00000000998, 3.87130911943, 1505.9370944909],
    [0.00000001003, 5.35180604374, 1681.36378672201],
    [0.00000001043, 1.20439768274, 3384.5751564883],
    [0.00000001133, 1.03655442301, 1357.8583700646],
    [0.00000001118, 3.02473429596, 892.7970751507],
    [0.00000000818, 3.19817529862, 1153.1572943357],
    [0.00000000883, 4.9484730073, 533.45790092711],
    [0.00000000883, 5.67539794824, 526.4116642291],
    [0.00000000966, 0.88110178776, 381.8560581518],
    [0.00000001014, 1.05859637798, 50.6463936626],
    [0.00000001014, 1.05859637798, 50.15875869559],
    [0.00000000977, 3.07712828393, 25035.39094090229],
    [0.00000000933, 3.89970622027, 671.8967977449],
    [0.00000000898, 2.17511781419, 2516.66404576769],
    [0.00000000787, 4.25746871915, 1056.917434687],
    [0.00000000788, 6.10879216964, 4002.64416683289],
    [0.0000000095, 2.54359450579, 532.6285413488],
    [0.00000000839, 3.46904179365, 4686.6455902233],
    [0.00000000965, 0.47908461253, 1520.1641884925],
    [0.00000001017, 3.23008830093, 1020.0082393266],
    [0.0000000082, 0.33194380569, 348.3913810875],
    [0.00000000786, 3.36629143378, 178.11819026941],
    [0.00000000929, 2.33109721672, 1130.47519297691],
    [0.00000000779, 6.05972875769, 224.1009782184],
    [0.00000000951, 0.17977055776, 25021.16384690069],
    [0.00000000917, 5.17636386869, 3899.5513926143],
    [0.00000000763, 6.06912796746, 432.2586343309],
    [0.00000000841, 3.14888189898, 643.32249753521],
    [0.00000000782, 2.23847303429, 1731.76636290111],
    [0.00000000945, 5.41706658717, 758.5272457282],
    [0.00000001032, 4.77033383542, 3075.2968338325],
    [0.00000000899, 1.08525568253, 1053.4059725492],
    [0.00000000822, 3.63842218035, 1354.18934135989],
    [0.00000000742, 2.00349570279, 896.7292284138],
    [0.00000000989, 0.49078513563, 493.2862196486],
    [0.00000000989, 3.84990051274, 566.58334550761],
    [0.00000000742, 4.21700173393, 948.4562186068],
    [0.00000000743, 0.15399551563, 3267.2552882681],
    [0.00000000785, 4.75769615946, 5091.90814063229],
    [0.00000000735, 1.17205944527, 1689.2280932482],
    [0.00000000902, 0.31191653892, 3487.66793070691],
    [0.00000000766, 4.59479371633, 402.4629859713],
    [0.0000000087, 5.19110249005, 522.2999707155],
    [0.0000000087, 2.29117581191, 537.5695944407],
    [0.00000000789, 1.67089119717, 950.3826342998],
    [0.00000000729, 0.18108618274, 2226.0326053436],
    [0.00000000967, 1.47776388922, 149.3193796511],
    [0.0000000074, 5.30434390465, 172.0014810099],
    [0.00000000732, 5.42947892699, 1600.3624130312],
    [0.00000000743, 3.66751928973, 6011.6893409589],
    [0.00000000773, 4.89422681258, 8616.85528644289],
    [0.00000000718, 3.85060206529, 1055.2059594426],
    [0.00000000814, 0.89760005882, 5.385256809],
    [0.0000000078, 1.36192178535, 949.3712423435],
    [0.00000000736, 2.50427265642, 23968.89546371229],
    [0.00000000703, 6.05341470629, 2108.7127371234],
    [0.00000000705, 4.27109184095, 260.01333583751],
    [0.00000000837, 6.23244350461, 97.4323307637],
    [0.00000000708, 1.83471250896, 628.6077685666],
    [0.000000007, 3.30963068355, 78.2068097885],
    [0.00000000704, 3.63963986047, 621.4942215658],
    [0.00000000972, 0.79938922309, 806.96977631951],
    [0.00000000902, 2.81734866519, 3259.39098174191],
    [0.00000000806, 2.20722357743, 703.8770021009],
    [0.00000000861, 0.12846059397, 215.99059347631],
    [0.00000000761, 1.26132938995, 2310.9661322975],
    [0.00000000705, 6.1237252338, 657.4065791849],
    [0.00000000758, 0.59861605652, 1382.64352936309],
    [0.00000000727, 4.99142796126, 64.7159210973],
    [0.00000000687, 2.94155817065, 952.8639447494],
    [0.00000000692, 2.45791725703, 10.051123255],
    [0.00000000963, 4.33870402832, 6916.1034067881],
    [0.00000000906, 6.05623889142, 110.4019545931],
    [0.00000000729, 0.96200157729, 3789.34507139489],
    [0.00000000678, 0.26412480699, 2218.91905834281],
    [0.0000000081, 3.48317459389, 678.0135070044],
    [0.00000000761, 0.98944003909, 1542.8462898513],
    [0.00000000734, 1.45019492995, 4863.4417305527],
    [0.00000000793, 2.38971782488, 209.6107596584],
    [0.00000000666, 3.51087567158, 4127.5652170209],
    [0.00000000849, 0.87603037716, 368.83825021259],
    [0.00000000815, 2.42173445767, 359.173956793],
    [0.00000000865, 3.38745286825, 157.0236274829],
    [0.00000000799, 3.3348003388, 519.15220687259],
    [0.0000000073, 5.68999754324, 98.6561710411],
    [0.00000000923, 0.04640766407, 179.6026629777],
    [0.00000000862, 0.85096575069, 1669.83045149109],
    [0.00000000903, 0.10254863796, 1745.0996850254],
    [0.00000000704, 0.4832304013, 718.8548556279],
    [0.00000000765, 2.39228400458, 1834.8591371197],
    [0.00000000651, 0.55942905431, 153.25153291419],
    [0.0000000067, 5.53772543546, 5702.4110183031],
    [0.00000000689, 4.05205162416, 540.49284787499],
    [0.00000000677, 1.95007474747, 745.6815585709],
    [0.00000000646, 0.1245857501, 2118.5200428949],
    [0.00000000744, 4.47249588475, 305.85311143459],
    [0.00000000837, 3.51443539039, 1818.3968108844],
    [0.00000000795, 1.49835916545, 376.9150050599],
    [0.00000000639, 0.44760408452, 5282.92637442791],
    [0.00000000639, 0.08134772596, 651.1868040614],
    [0.00000000791, 5.22053399158, 2432.21815378081],
    [0.00000000666, 3.04828183923, 2439.3317007816],
    [0.00000000699, 3.61168485832, 999.8220026324],
    [0.00000000848, 4.7250550158, 445.00125562421],
    [0.00000000784, 0.87407256063, 1372.3485886246],
    [0.00000000784, 3.91355130181, 494.022424959],
    [0.00000000826, 5.6662701666, 1063.0702659688],
    [0.00000000773, 1.76079397166, 3334.1725803092],
    [0.00000000766, 3.62656366077, 927.5911504839],
    [0.00000000629, 5.55045637886, 444.1074837469],
    [0.0000000068, 4.21509885032, 2854.3965564267],
    [0.00000000652, 1.27664994367, 99.92819542829],
    [0.00000000628, 4.74686224811, 3693.8534791441],
    [0.0000000081, 3.03838651852, 721.40560204669],
    [0.00000000854, 6.18289625105, 1366.4563897737],
    [0.00000000867, 5.76374497089, 10846.3131030077],
    [0.00000000788, 6.12952239651, 1040.97886544099],
    [0.00000000626, 4.2229964105, 841.9068640046],
    [0.0000000063, 5.17292925619, 291.76902978489],
    [0.0000000065, 2.73748814643, 558.3889705813],
    [0.00000000611, 3.22751051338, 4443.9570866775],
    [0.00000000726, 2.09447836425, 2151.25100677631],
    [0.00000000751, 5.81420327516, 446.06752933469],
    [0.00000000615, 5.59117038277, 208.3894115085],
    [0.00000000745, 2.60964521069, 451.97179027311],
    [0.00000000614, 3.69094819583, 6121.8956621783],
    [0.00000000603, 0.30175769208, 181.56270856549],
    [0.00000000616, 0.71796395195, 1144.0716396596],
    [0.00000000636, 0.81670492532, 1751.2957139325],
    [0.00000000596, 2.57571835843, 737.60480372361],
    [0.00000000619, 4.371532689, 326.1969146957],
    [0.00000000787, 1.03322103547, 1802.12817323829],
    [0.00000000781, 3.79546900139, 88.35873817511],
    [0.00000000617, 3.74482275875, 921.108250802],
    [0.00000000591, 2.16133870119, 1166.1630401874],
    [0.0000000059, 5.76599972625, 3634.37720703489],
    [0.00000000722, 2.97658953647, 1791.5701079414],
    [0.0000000082, 4.24711097101, 1372.08546406621],
    [0.0000000059, 4.55770998857, 627.61093082531],
    [0.00000000611, 2.00459977476, 392.9017584157],
    [0.00000000611, 2.33608587361, 666.96780674051],
    [0.00000000584, 5.7111900971, 2737.5643231735],
    [0.00000000624, 1.77518234702, 702.1800810715],
    [0.000000006, 3.53895345579, 203.49405039889],
    [0.0000000072, 3.17911251266, 3333.7426971825],
    [0.00000000715, 6.07736623315, 3347.96979118411],
    [0.00000000604, 0.540722296, 427.3632732213],
    [0.00000000578, 0.68384333266, 881.7513748868],
    [0.00000000752, 2.27484845625, 799.36859435169],
    [0.00000000581, 5.43194940731, 2954.0448123492],
    [0.00000000754, 4.23362271932, 1022.9771847432],
    [0.00000000772, 3.22944539114, 711.7413086271],
    [0.00000000577, 3.90731032425, 700.2079733962],
    [0.00000000736, 2.17294584865, 458.12212942741],
    [0.00000000736, 2.16773979972, 601.7474357288],
    [0.00000000693, 4.97718562978, 1967.96000801901],
    [0.0000000074, 2.23775921738, 416.79314583689],
    [0.00000000704, 2.75287525372, 425.35753565121],
    [0.00000000708, 4.5975558696, 3391.68870348911],
    [0.00000000607, 5.77643174191, 105.76971804189],
    [0.00000000559, 4.05584510248, 20426.8149099055],
    [0.00000000628, 6.14517735977, 1809.72935520611],
    [0.00000000696, 3.48103715785, 378.8871127352],
    [0.00000000554, 4.24043679096, 386.00065973601],
    [0.00000000589, 2.84804112106, 3273.8812003019],
    [0.00000000633, 5.05901975525, 131.16013238639],
    [0.00000000562, 2.97186811483, 4803.9654584435],
    [0.0000000056, 4.71048501869, 421.212934067],
    [0.0000000058, 1.24952540618, 5179.8336002093],
    [0.0000000074, 2.67735727689, 913.5070688342],
    [0.00000000699, 1.23224313252, 2627.3580019541],
    [0.00000000699, 1.23224313252, 2626.8703669871],
    [0.00000000747, 1.73127494354, 90.3187837629],
    [0.00000000575, 1.40772978331, 1656.9847643338],
    [0.00000000555, 2.46441478919, 6702.8043113501],
    [0.00000000559, 5.27994346504, 388.9696051526],
    [0.00000000672, 3.95084883531, 2417.24030025381],
    [0.00000000606, 2.25540936996, 3693.36584417709],
    [0.00000000538, 0.92849193558, 7564.58690325449],
    [0.00000000539, 5.86855643077, 828.16740497],
    [0.00000000548, 0.57206390796, 4700.87268422489],
    [0.00000000599, 1.91496502312, 108.47803102759],
    [0.0000000055, 0.94455632585, 3046.3550108623],
    [0.00000000652, 3.4417070633, 282.20780222929],
    [0.00000000586, 4.87892797654, 878.08234618209],
    [0.00000000622, 1.44606819015, 568.80402352629],
    [0.00000000728, 4.06001131597, 344.45922782439],
    [0.00000000544, 3.8884959787, 10633.0140075697],
    [0.00000000657, 2.19781111367, 464.97504399731],
    [0.00000000546, 0.09522235899, 4112.8504880523],
    [0.00000000541, 2.90330545324, 121.0082039998],
    [0.00000000695, 4.33330180196, 421.6885069465],
    [0.00000000601, 0.02013991441, 426.3207434977],
    [0.00000000525, 2.67444074803, 76674.39271195528],
    [0.00000000532, 4.39556016683, 8734.17515466309],
    [0.00000000622, 4.02967281763, 1091.3814416201],
    [0.00000000553, 5.66376860324, 604.2287461784],
    [0.00000000633, 3.7016237038, 2274.303015153],
    [0.00000000564, 1.73577608543, 241.8540885728],
    [0.00000000516, 0.26364140815, 5599.3182440845],
    [0.00000000645, 1.3065792923, 10110.4365894759],
    [0.00000000509, 2.11728726417, 1159.0494931866],
    [0.00000000507, 5.07344432036, 615.7620814093],
    [0.00000000599, 4.14881340222, 185.2317372702],
    [0.00000000522, 0.92209254895, 1884.36794142151],
    [0.0000000052, 2.30383555351, 1457.2821155785],
    [0.00000000527, 0.12531819468, 1512.56300652469],
    [0.00000000503, 3.39203314539, 1037.7974717033],
    [0.00000000517, 5.27606872473, 6018.8028879597],
    [0.00000000613, 1.73070833822, 607.8977748831],
    [0.00000000601, 1.95549963379, 700.6956083632],
    [0.00000000505, 3.18507574383, 5908.5965667403],
    [0.00000000679, 5.71225833484, 1357.3707350976],
    [0.00000000496, 1.76244328747, 1048.8431719672],
    [0.00000000602, 0.81687029998, 680.98245242101],
    [0.00000000621, 3.11600964819, 1560.3748897971],
    [0.00000000623, 2.89379873996, 120.01136625851],
    [0.00000000494, 1.02217524155, 523.5719951027],
    [0.00000000494, 0.17691775323, 536.29757005351],
    [0.000000005, 0.07757434568, 2840.6570973921],
    [0.00000000657, 1.97087292015, 2351.0567213956],
    [0.00000000587, 5.17430255862, 215.50295850929],
    [0.00000000609, 5.71512479774, 614.868309532],
    [0.00000000609, 2.57353214415, 614.38067456499],
    [0.00000000502, 4.96490318108, 1379.4621356254],
    [0.00000000492, 1.7408300762, 419.28901050149],
    [0.00000000485, 3.23499089371, 1937.9519113383],
    [0.00000000484, 4.83554210114, 102.0981972097],
    [0.00000000491, 4.82626130082, 419.1926422819],
    [0.00000000636, 0.80534214264, 664.5201261857],
    [0.00000000478, 2.68779652903, 204.97852310719],
    [0.00000000494, 4.49966350328, 2758.9049641759],
    [0.00000000495, 3.15153574636, 398.5308327082],
    [0.00000000483, 2.53161064938, 89.10949770051],
    [0.00000000589, 1.83933111516, 2740.7457169112],
    [0.000000006, 1.57257401507, 634.512029505],
    [0.00000000486, 5.0446731939, 2203.94120481581],
    [0.00000000515, 6.13663617559, 1091.1183170617],
    [0.00000000615, 1.1137461452, 3700.96702614491],
    [0.0000000049, 1.91408549288, 8631.0823804445],
    [0.00000000494, 4.66411522593, 984.35651413839],
    [0.00000000475, 2.27777755361, 103.59971626049],
    [0.00000000475, 2.59023496451, 835.5440765292],
    [0.00000000512, 5.15116159496, 397.9001853893],
    [0.00000000655, 1.80371823253, 127.22797912329],
    [0.00000000468, 0.94842717325, 582.62498061761],
    [0.00000000468, 3.39225847512, 477.2445845386],
    [0.00000000543, 2.77376969444, 481.1767378017],
    [0.00000000543, 1.56691595393, 578.69282735451],
    [0.00000000517, 0.86310995182, 76.0222537921],
    [0.00000000573, 1.37924154661, 1132.9228735317],
    [0.00000000649, 0.37556266722, 3184.6093831746],
    [0.0000000048, 4.52427818977, 2133.2347718635],
    [0.00000000468, 2.06153810948, 2048.1582325577],
    [0.00000000594, 0.39773738437, 390.9296507404],
    [0.00000000459, 1.62165138981, 937.8860912224],
    [0.00000000481, 2.13958103959, 1443.6856688958],
    [0.00000000463, 5.78478013513, 429.7627696663],
    [0.00000000545, 0.16089867082, 3157.04896704871],
    [0.00000000475, 5.50914223201, 3907.1525745821],
    [0.00000000609, 4.81927839884, 1595.5364878908],
    [0.00000000473, 6.26679260619, 733.67265046051],
    [0.00000000541, 1.14751616188, 52176.0501006319],
    [0.00000000533, 5.98390379378, 382.85289589309],
    [0.00000000534, 4.28038540288, 843.8789716799],
    [0.00000000451, 2.42625593348, 5371.30441967789],
    [0.00000000471, 4.45737409056, 2572.4325716809],
    [0.00000000558, 2.14287458249, 594.8945211589],
    [0.00000000588, 1.67758273586, 458.33457774851],
    [0.00000000482, 4.23247478761, 6114.7821151775],
    [0.00000000449, 4.70348907548, 1221.6047488379],
    [0.00000000447, 5.21836347199, 584.26951202031],
    [0.00000000447, 5.40550748355, 475.6000531359],
    [0.00000000466, 3.79996346648, 632.50629193491],
    [0.00000000624, 2.89552279007, 10529.9212333511],
    [0.00000000605, 5.04020796752, 300.854684461],
    [0.00000000487, 2.27435976567, 321.3015535861],
    [0.00000000487, 0.14720235737, 206.9049388002],
    [0.00000000526, 1.60016547325, 1336.6607414141],
    [0.0000000045, 4.45402230413, 518.62844988331],
    [0.0000000045, 3.02825599783, 541.2411152729],
    [0.00000000452, 2.45557763807, 252.4121538697],
    [0.00000000569, 6.06714280091, 207.426203662],
    [0.00000000442, 0.71239558825, 10976.83498721549],
    [0.00000000435, 2.0445731558, 218.4719039259],
    [0.00000000536, 1.16069752348, 1781.2751672029],
    [0.00000000606, 1.47437041783, 6599.7115371315],
    [0.0000000043, 6.27151324176, 2535.3109279994],
    [0.00000000465, 3.76774297614, 1084.0047700609],
    [0.00000000528, 3.23700299396, 557.75832326239],
    [0.00000000602, 1.89096655273, 354.76872277791],
    [0.00000000602, 2.44971909564, 705.1008423783],
    [0.00000000579, 2.0538396242, 462.05428269051],
    [0.00000000579, 2.28684602417, 597.8152824657],
    [0.0000000048, 5.15414760143, 1106.0961705887],
    [0.00000000561, 0.48075957659, 1859.2381595079],
    [0.00000000565, 3.20740832233, 531.8948281659],
    [0.00000000593, 3.87608972833, 1291.6747912064],
    [0.00000000593, 3.87608972833, 1291.1871562394],
    [0.00000000467, 1.83754367407, 2833.0559154243],
    [0.00000000423, 0.03642510895, 799.8562293187],
    [0.00000000591, 2.46012843727, 1819.3936486257],
    [0.00000000442, 1.08908006468, 1069.18697522831],
    [0.00000000538, 1.02927939001, 1065.35788782919],
    [0.00000000472, 2.28157145696, 460.2946233363],
    [0.00000000432, 6.00978313661, 2080.8746422241],
    [0.00000000415, 2.96241779304, 4760.34895633411],
    [0.00000000455, 3.03366464226, 2527.4466214732],
    [0.00000000506, 0.3624715509, 535.6669227346],
    [0.00000000408, 3.08015718534, 237.4343003427],
    [0.00000000558, 1.03001492173, 2348.087775979],
    [0.00000000506, 5.25352948963, 2424.3538472546],
    [0.00000000496, 6.06044529767, 4120.4516700201],
    [0.00000000496, 2.91885264408, 4119.96403505309],
    [0.00000000432, 1.29582024184, 1301.236018762],
    [0.0000000055, 5.4347510878, 8837.26792888169],
    [0.00000000546, 3.31132091883, 761.98382611181],
    [0.00000000546, 0.16972826524, 761.49619114479],
    [0.00000000435, 6.11673595133, 205.8935468439],
    [0.00000000463, 4.32054580531, 633.5488216585],
    [0.00000000408, 1.79247263237, 1482.55490984399],
    [0.00000000483, 0.34268842153, 2879.2632137819],
    [0.00000000511, 3.60313597493, 1670.5812110165],
    [0.00000000421, 5.74575757785, 638.65663108921],
    [0.00000000512, 4.63462743085, 1474.4299708869],
    [0.00000000388, 5.80743867551, 2425.10460678],
    [0.00000000483, 5.6108889756, 154.0546820663],
    [0.00000000412, 3.95817641351, 83.6234357599],
    [0.00000000384, 0.10024887062, 673.8689054202],
    [0.000000004, 2.77474684816, 2755.7235704382],
    [0.000000005, 0.772169471, 1973.37663399041],
    [0.0000000038, 6.00308091678, 3583.64715792471],
    [0.00000000509, 6.23294075938, 5856.23384163189],
    [0.00000000392, 3.41709820264, 6328.0812106155],
    [0.00000000391, 5.34392743186, 670.89996000361],
    [0.00000000397, 5.90731747027, 50586.48957038109],
    [0.00000000468, 5.85291318311, 1970.9289534356],
    [0.00000000491, 6.06026074383, 1288.7058457898],
    [0.00000000491, 2.91866809024, 1288.21821082279],
    [0.00000000472, 5.64551789445, 416.532513406],
    [0.00000000491, 2.66310290421, 601.5349874077],
    [0.00000000476, 0.29096139335, 2015.42726867629],
];

const X1: &[Term] = &[
    [0.0191255649, 4.23275123829, 0.2438174835],
    [0.00634902259, 0.10706507632, 1059.6257476727],
    [0.00600483021, 2.42939944495, 522.8212355773],
    [0.00589005176, 1.91564604125, 537.0483295789],
    [0.00081432741, 3.47331266459, 7.3573644843],
    [0.00046191617, 0.45737291603, 1589.3167127673],
    [0.00037242394, 3.38536248935, 529.9347825781],
    [0.00032508552, 1.74680960116, 1052.51220067191],
    [0.00031231184, 2.34701987017, 1066.7392946735],
    [0.0002595074, 5.5278077932, 529.44714761109],
    [0.00020232242, 4.46840569934, 110.45013870291],
    [0.0001794164, 4.02099530935, 426.8420083595],
    [0.00013643757, 0.30427911223, 633.0275567967],
    [0.00012962263, 2.56767956763, 515.70768857651],
    [0.00009123979, 1.78092724073, 544.1618765797],
    [0.00008098978, 6.15662077289, 949.4194264533],
    [0.00007143102, 3.17367507069, 323.74923414091],
    [0.00004115125, 4.68496126162, 205.9417309537],
    [0.00004370464, 1.1454054513, 736.1203310153],
    [0.00003400571, 2.90100216943, 526.7533888404],
    [0.00003332481, 1.43702485996, 533.1161763158],
    [0.00003869655, 3.33803842759, 14.47091148511],
    [0.00003043986, 1.65416267419, 526.00262931501],
    [0.00003013156, 2.59693904643, 419.72846135871],
    [0.00003001886, 2.683619268, 533.8669358412],
    [0.00002892493, 4.90922246003, 103.3365917021],
    [0.00002393125, 3.6222341228, 316.6356871401],
    [0.00002989944, 0.80713415295, 2119.00767786191],
    [0.00002354966, 3.28995924205, 109.9625037359],
    [0.00001853775, 2.76966317285, 1596.43025976811],
    [0.00001972856, 5.08955117905, 956.53297345411],
    [0.00001820762, 0.66887392674, 743.23387801611],
    [0.00001810752, 3.83905864684, 95.7354097343],
    [0.00001531701, 4.31865285485, 117.5636857037],
    [0.00001894874, 1.86455327598, 1582.2031657665],
    [0.00001527752, 1.49162793541, 640.1411037975],
    [0.00001634391, 1.39765618229, 1045.3986536711],
    [0.00001088512, 1.51681538001, 625.9140097959],
    [0.00001025988, 2.57282118549, 433.9555553603],
    [0.00001045564, 2.5307547183, 1265.81129610991],
    [0.00000977087, 2.19851142066, 220.6564599223],
    [0.00000984636, 1.4290090058, 1169.83206889211],
    [0.0000080513, 0.01887809686, 942.3058794525],
    [0.00000821829, 5.66460920839, 309.0345051723],
    [0.00000798891, 1.85669438695, 1155.6049748905],
    [0.00000834956, 5.16168526363, 522.3336006103],
    [0.00000600935, 2.35527790752, 6.86972951729],
    [0.0000075213, 0.12867542563, 1162.7185218913],
    [0.00000539923, 4.24283648453, 853.4401992355],
    [0.00000599196, 4.21898955063, 213.0552779545],
    [0.00000497018, 4.81516413781, 198.82818395289],
    [0.0000047693, 5.90061449066, 1692.40948698591],
    [0.00000499703, 3.02089381667, 330.8627811417],
    [0.00000383795, 2.17189096891, 1073.85284167431],
    [0.00000504945, 5.88136662932, 1059.1381127057],
    [0.00000402231, 6.21084762941, 1479.11039154791],
    [0.00000373538, 1.28962855954, 729.0067840145],
    [0.00000349467, 3.10812701391, 426.3543733925],
    [0.00000316847, 2.11759539145, 839.2131052339],
    [0.00000324562, 5.71130479446, 206.42936592071],
    [0.00000246849, 4.10602399001, 838.72547026689],
    [0.00000255191, 3.6260714249, 412.12727939089],
    [0.00000230121, 2.72254614569, 508.5941415757],
    [0.00000246851, 1.7501128, 1272.9248431107],
    [0.0000022227, 2.70702942772, 412.6149143579],
    [0.00000213383, 2.90120840681, 1376.0176173293],
    [0.00000225567, 5.42992965137, 625.42637482889],
    [0.00000212049, 3.04058050625, 3.42521122121],
    [0.00000181234, 3.64994746675, 1368.9040703285],
    [0.00000174181, 1.85281706799, 1062.80714141041],
    [0.00000189391, 1.1574911746, 2648.6986429565],
    [0.00000161119, 3.02399692553, 519.63984183961],
    [0.00000157874, 1.64594194339, 536.5606946119],
    [0.0000014542, 2.71846376946, 1258.6977491091],
    [0.00000144205, 2.08426886196, 1055.6935944096],
    [0.00000143507, 3.70576716798, 309.5221401393],
    [0.00000126188, 3.31694506826, 1063.55790093581],
    [0.00000124788, 1.62052640087, 551.27542358051],
    [0.00000125329, 1.31439998076, 540.2297233166],
    [0.00000146669, 2.72335559452, 1056.444353935],
    [0.00000115893, 3.1816267757, 2126.1212248627],
    [0.00000124485, 0.17472854156, 3.6883357796],
    [0.00000118218, 4.80555513709, 515.2200536095],
    [0.00000114208, 2.0582067744, 227.77000692311],
    [0.00000113852, 2.70245764618, 742.74624304909],
    [0.00000144447, 6.08317056171, 1486.2239385487],
    [0.00000124849, 1.6322592906, 1575.08961876571],
    [0.00000093951, 3.84985265371, 1155.1173399235],
    [0.00000100599, 2.02088520418, 2111.8941308611],
    [0.00000103583, 5.06428969516, 419.2408263917],
    [0.00000092556, 1.85907721166, 1699.5230339867],
    [0.00000099479, 5.7878306356, 301.9209581715],
    [0.00000082832, 1.28886276595, 441.06910236111],
    [0.00000086688, 5.09274860535, 941.8182444855],
    [0.00000095969, 2.12504520091, 102.84895673509],
    [0.00000080324, 0.88712083078, 1471.9968445471],
    [0.00000102333, 3.18857661435, 21.5844584859],
    [0.00000078195, 5.09322017801, 525.26891613211],
    [0.00000074123, 1.57689883069, 647.25465079831],
    [0.0000007927, 3.27341766644, 728.5191490475],
    [0.00000074807, 5.52867705621, 534.6006490241],
    [0.00000087759, 4.1641399098, 632.5399218297],
    [0.000000698, 2.80403510206, 618.8004627951],
    [0.00000060886, 4.07058850374, 846.3266522347],
    [0.00000058777, 2.25774461225, 832.0995582331],
    [0.00000061003, 6.24178613664, 2222.1004520805],
    [0.00000066693, 2.2828821612, 1685.2959399851],
    [0.00000050999, 5.78085041063, 2008.8013566425],
    [0.00000050585, 4.75410728625, 213.5429129215],
    [0.0000004585, 4.24082041831, 831.6119232661],
    [0.00000052339, 1.38343334733, 1038.2851066703],
    [0.00000046409, 2.49832780835, 524.5181566067],
    [0.00000049446, 2.75500829134, 963.6465204549],
    [0.00000045782, 1.84235784093, 535.35140854951],
    [0.00000061385, 2.63233647245, 1795.5022612045],
    [0.00000058958, 2.91371154675, 316.14805217309],
    [0.00000059833, 4.54238626333, 4.1759707466],
    [0.00000043525, 0.40754709239, 149.8070146181],
    [0.00000039973, 4.82513939066, 1383.13116433011],
    [0.0000005317, 1.55759345804, 750.3474250169],
    [0.00000039316, 3.5885060958, 1471.50920958009],
    [0.00000040288, 1.77691319997, 948.9317914863],
    [0.00000038303, 1.25612538854, 511.7755353134],
    [0.00000036523, 3.08500012455, 548.0940298428],
    [0.00000038571, 4.79060991224, 1258.21011414209],
    [0.00000035601, 2.8174190783, 10.538758222],
    [0.00000036868, 1.53995872607, 527.01402127131],
    [0.00000036603, 2.80095469601, 532.8555438849],
    [0.00000041197, 3.47741533158, 845.8390172677],
    [0.00000030575, 4.13554799825, 124.6772327045],
    [0.00000027619, 1.69648523137, 1802.6158082053],
    [0.00000032289, 5.50255743191, 618.3128278281],
    [0.0000002847, 3.04847955006, 1044.9110187041],
    [0.00000025452, 1.34642958378, 1265.32366114289],
    [0.00000027183, 2.69831398387, 1898.5950354231],
    [0.00000022512, 0.44856506675, 639.6534688305],
    [0.00000022622, 0.18357944836, 935.19233245171],
    [0.00000024508, 3.71033407609, 1361.79052332771],
    [0.0000002526, 1.81233714136, 540.98048284201],
    [0.00000020677, 3.98002843517, 1148.00379292269],
    [0.0000002819, 3.07761522702, 1905.70858242391],
    [0.00000020297, 3.81657536112, 1162.23088692429],
    [0.00000025685, 1.55199744523, 735.6326960483],
    [0.00000019769, 5.53593575435, 11.2895177474],
    [0.00000017928, 3.04845555075, 98.91680347199],
    [0.00000017469, 3.32708371179, 1787.9010792367],
    [0.00000018703, 4.50425954841, 1574.6019837987],
    [0.00000018135, 3.93430947434, 910.0625505381],
    [0.00000017089, 2.56125921461, 1603.5438067689],
    [0.00000017538, 6.04152227093, 525.7419968841],
    [0.00000017368, 4.58219600456, 534.1275682721],
    [0.00000019204, 2.23161769695, 1375.52998236229],
    [0.00000017455, 0.10703246236, 76.50988875911],
    [0.00000016153, 4.30082408762, 99.6675629974],
    [0.0000001646, 2.09636027394, 1788.38871420371],
    [0.00000015683, 3.99052583747, 2.9375762542],
    [0.00000016034, 4.98317709627, 191.7146369521],
    [0.00000015051, 2.78980787117, 106.0303504728],
    [0.00000014892, 1.77707927575, 518.8890823142],
    [0.00000015187, 6.07616641818, 1588.82907780029],
    [0.00000017388, 4.43775098797, 18.40306474821],
    [0.00000014796, 2.06469993479, 1049.3308069342],
    [0.00000015408, 4.06617777635, 106.5179854398],
    [0.00000017378, 0.47153358689, 88.6218627335],
    [0.00000013474, 1.04099539964, 1581.7155307995],
    [0.00000013574, 4.03698274106, 106.7811099982],
    [0.00000017733, 3.5334515051, 860.55374623631],
    [0.00000014099, 5.20790939624, 934.70469748469],
    [0.0000001469, 2.86077681205, 337.9763281425],
    [0.00000011717, 1.5030985131, 3178.38960805111],
    [0.00000010988, 2.13993350041, 2214.98690507971],
    [0.00000010909, 0.16362139771, 1052.02456570489],
    [0.00000011465, 2.83736836823, 1361.3028883607],
    [0.00000010506, 1.65935656006, 2104.7805838603],
    [0.00000012808, 5.23966663914, 96.2230447013],
    [0.00000013402, 1.46045916222, 721.8932370137],
    [0.00000010003, 3.71949533579, 1464.3956625793],
    [0.00000011029, 4.75763401948, 604.7163811454],
    [0.00000009807, 5.38496623744, 107.2687449652],
    [0.00000011312, 1.0498029835, 220.16882495529],
    [0.00000010028, 5.51845919925, 497.69145366371],
    [0.00000009515, 4.20231641978, 1890.9938534553],
    [0.00000010988, 0.55033431492, 2015.9149036433],
    [0.00000010134, 2.26013428987, 1592.498106505],
    [0.00000008954, 5.582857539, 10.8018827804],
    [0.00000008739, 3.10143619037, 91.8032564712],
    [0.00000008399, 2.39323702495, 1148.49142788971],
    [0.00000008408, 2.5367122946, 1585.38455950421],
    [0.0000000923, 5.10523054826, 562.1781114925],
    [0.00000008186, 3.07470498245, 2104.2929488933],
    [0.00000008259, 3.79122069331, 302.40859313851],
    [0.000000099, 3.0879790519, 1478.62275658089],
    [0.00000010878, 3.84174776466, 113.6315324406],
    [0.00000009582, 5.95011959797, 455.1531840108],
    [0.00000007712, 2.87491912382, 422.9098550964],
    [0.00000007595, 1.59710858352, 629.846163059],
    [0.00000008496, 2.61146913566, 224.5886131854],
    [0.00000007414, 2.03258534769, 39.1130584317],
    [0.00000007292, 2.69782256595, 430.02340209721],
    [0.00000007357, 3.64822171992, 2655.8121899573],
    [0.00000007633, 1.32269581525, 636.95971005981],
    [0.00000007369, 2.2867571879, 2229.2139990813],
    [0.00000007258, 4.08894525395, 423.66061462181],
    [0.00000007648, 2.32798852949, 2001.68780964171],
    [0.00000008081, 2.88299363492, 1586.13531902961],
    [0.00000007334, 5.14442280849, 529.1840230527],
    [0.00000007334, 5.47944814706, 530.68554210351],
    [0.00000007088, 2.33493448028, 13.9832765181],
    [0.00000006944, 2.85039309523, 99.40443843901],
    [0.00000007575, 5.37079456066, 121.4958389668],
    [0.00000006848, 0.78796625546, 1898.10740045609],
    [0.0000000687, 1.15013907149, 1158.78636862821],
    [0.00000006772, 5.07892665697, 1048.58004740881],
    [0.00000007746, 1.97831751281, 1691.9218520189],
    [0.00000006468, 0.83654880503, 1165.89991562901],
    [0.00000006936, 0.21365116245, 953.3515797164],
    [0.00000006382, 2.33142676077, 1159.53712815361],
    [0.00000006464, 3.96902820569, 113.89465699899],
    [0.0000000627, 1.41636529387, 387.4851324443],
    [0.00000006557, 0.09772332548, 636.2089505344],
    [0.00000007405, 3.418012234, 405.5013673571],
    [0.00000006424, 2.56898493091, 312.70353387701],
    [0.00000006311, 4.22916699759, 983.3596763971],
    [0.00000007257, 4.97217454857, 1251.0965671413],
    [0.00000006999, 1.52695047635, 323.2615991739],
    [0.00000005842, 2.07617926504, 1166.6506751544],
    [0.00000006084, 6.08154567006, 2538.4923217371],
    [0.00000005618, 1.65396088949, 71.09326278771],
    [0.0000000559, 1.91532661942, 234.8835539239],
    [0.00000005829, 0.16935049171, 1041.466500408],
    [0.00000006815, 4.442641734, 305.10235190919],
    [0.00000005423, 5.67735456927, 114.38229196601],
    [0.00000005434, 2.90645289424, 1251.5842021083],
    [0.00000005984, 2.75504343237, 319.8170808778],
    [0.00000005352, 2.47648610539, 415.7963080956],
    [0.00000005826, 2.69993180753, 1891.4814884223],
    [0.00000005519, 3.64099912123, 1593.2488660304],
    [0.00000005189, 0.91842109203, 448.1826493619],
    [0.00000005286, 4.46266267934, 505.5557601899],
    [0.00000005876, 4.11769538608, 459.0853372739],
    [0.00000005578, 4.41596318124, 437.8877086234],
    [0.00000004953, 3.44649774547, 1780.78753223589],
    [0.00000004928, 4.6826811408, 199.3158189199],
    [0.00000004972, 6.16120827874, 554.31380496631],
    [0.00000004889, 3.00346445874, 117.0760507367],
    [0.00000005942, 3.32585444966, 512.5262948388],
    [0.00000004807, 1.83942967124, 494.510059926],
    [0.00000005528, 3.37702275374, 430.7741616226],
    [0.00000004806, 4.93123850862, 956.04533848709],
    [0.0000000619, 0.33303059089, 2751.79141717511],
    [0.00000005306, 1.69049301545, 1069.92068841121],
    [0.00000004939, 3.92798617287, 2207.38572311189],
    [0.00000005203, 1.87963213473, 498.91529394111],
    [0.00000004397, 2.501286595, 565.35950523021],
    [0.00000004342, 2.91932588132, 672.3844327119],
    [0.00000004528, 2.64641812201, 1677.6947580173],
    [0.00000004334, 3.43386241697, 611.6869157943],
    [0.00000004608, 0.94871692824, 679.4979797127],
    [0.00000004812, 2.46105351857, 560.9542712151],
    [0.00000004305, 3.17292686307, 1070.6714479366],
    [0.00000004662, 6.19278511564, 621.98185653281],
    [0.00000004362, 0.81856641043, 81.50831573269],
    [0.00000004781, 0.23034918069, 600.7842278823],
    [0.00000004148, 1.91465810869, 1080.9663886751],
    [0.00000004478, 0.83734666663, 629.0954035336],
    [0.00000004108, 1.85129748483, 644.0732570606],
    [0.00000004654, 4.97986041266, 508.10650660869],
    [0.0000000426, 4.99902513065, 209.87388421679],
    [0.00000005131, 0.48588112186, 946.23803271561],
    [0.00000003845, 1.59767295215, 970.7600674557],
    [0.00000003839, 2.82406421175, 2420.68481854989],
    [0.00000003898, 5.93876139914, 1064.29161411871],
    [0.00000004274, 2.31117388618, 31.9995114309],
    [0.00000003986, 5.18457061537, 952.60082019101],
    [0.0000000388, 5.29550041805, 504.8050006645],
    [0.00000005205, 2.65346011281, 1795.0146262375],
    [0.00000003879, 1.78725414335, 747.1660312792],
    [0.00000003965, 1.33979952763, 501.62360692681],
    [0.00000004541, 1.67944661862, 757.4609720177],
    [0.00000003663, 2.53934739854, 2318.0796792983],
    [0.00000004938, 5.95351997396, 294.80741117069],
    [0.00000003643, 5.32837052634, 555.0645644917],
    [0.0000000385, 1.68007336193, 835.28095197081],
    [0.00000003693, 3.00088611994, 558.2459582294],
    [0.00000003818, 5.13364214511, 2325.1932262991],
    [0.00000003422, 0.51968162936, 2214.4992701127],
    [0.00000003726, 1.58879941368, 740.0524842784],
    [0.00000003306, 2.13594948327, 2641.5850959557],
    [0.00000003331, 2.97883947073, 501.4805945749],
    [0.00000003289, 2.06996431796, 1066.2516597065],
    [0.00000004224, 0.94453108652, 547.34327031741],
    [0.00000003214, 6.2107335605, 498.4422131891],
    [0.00000003771, 3.1981216853, 1493.3374855495],
    [0.00000003357, 4.06089125495, 1272.4372081437],
    [0.00000003469, 3.39231437882, 1678.1823929843],
    [0.00000003147, 0.44528787143, 654.3681977991],
    [0.00000003122, 5.26948049817, 1912.8221294247],
    [0.00000003766, 1.55302482141, 1567.9760717649],
    [0.00000003766, 4.694617475, 1567.48843679789],
    [0.00000003651, 1.76784115018, 2008.3137216755],
    [0.0000000335, 3.60014817718, 6276.2061204741],
    [0.00000002969, 4.41313741154, 561.4273519671],
    [0.00000002926, 2.44841800418, 824.9860112323],
    [0.00000003251, 3.05741893468, 6290.4332144757],
    [0.00000003134, 5.02262053935, 10206.4158166937],
    [0.00000003154, 2.88790610293, 483.4643596621],
    [0.00000002968, 2.52814022, 597.60283414461],
    [0.00000003023, 5.26034603701, 938.3737261894],
    [0.00000003496, 5.37662649242, 1054.9598812267],
    [0.00000002718, 1.12612274568, 1151.6728216274],
    [0.00000003041, 4.48045335531, 10220.6429106953],
    [0.00000002652, 1.50411451235, 960.4651267172],
    [0.0000000272, 2.58012487497, 326.9306278786],
    [0.00000002672, 2.37743868437, 537.7990891043],
    [0.00000002672, 1.963246964, 522.0704760519],
    [0.00000002641, 1.93870259756, 2531.3787747363],
    [0.00000002658, 2.71532856876, 1062.0734282275],
    [0.00000002567, 2.71690582841, 415.3086731286],
    [0.00000002847, 2.92204886379, 1176.9456158929],
    [0.00000002545, 0.06405909754, 1098.9826235879],
    [0.00000002658, 0.64454112605, 1057.1780671179],
    [0.00000003084, 4.14043630979, 320.5678404032],
    [0.00000003075, 1.56268674394, 462.2667310116],
    [0.00000002804, 1.45328370683, 576.4052054941],
    [0.00000002606, 3.64826504072, 2523.7775927685],
    [0.00000003, 2.0852860949, 230.3207533419],
    [0.00000002425, 2.52434943707, 422.42222012939],
    [0.00000002483, 3.69036238721, 209.12312469139],
    [0.0000000239, 0.07414982415, 210.36151918381],
    [0.00000002327, 3.9965078958, 416.059432654],
    [0.00000002797, 1.87832948272, 2332.3067732999],
    [0.00000002273, 4.8998440929, 945.48727319021],
    [0.0000000298, 5.2845489319, 202.760337216],
    [0.00000002267, 3.20625354263, 2097.1794018925],
    [0.0000000233, 4.1827408904, 849.5080459724],
    [0.0000000294, 2.32020734015, 2111.40649589409],
    [0.00000002403, 6.15190475337, 433.46792039329],
    [0.00000002256, 2.98060305636, 1054.20912170131],
    [0.00000002203, 5.95488550794, 217.4750661846],
    [0.00000002189, 4.68499930418, 1514.5351142],
    [0.0000000212, 3.75884388832, 423.17297965479],
    [0.00000002093, 1.34498726275, 543.6742416127],
    [0.00000002373, 4.97528466796, 536.1545577016],
    [0.00000002373, 5.64858628759, 523.71500745461],
    [0.0000000204, 2.72132861555, 988.7763023685],
    [0.00000002105, 3.22262200918, 1059.5775635629],
    [0.00000002005, 1.80102545599, 460.7822583033],
    [0.00000001997, 1.58652758554, 504.66198831261],
    [0.00000002033, 2.03694665564, 1173.7642221552],
    [0.00000001976, 3.51326639371, 46.71424039951],
    [0.00000002284, 1.652482731, 531.5793139808],
    [0.00000002284, 2.68820291737, 528.29025117541],
    [0.00000002219, 5.00103752698, 5230.5636493195],
    [0.00000002084, 5.36575264228, 490.5779066629],
    [0.0000000202, 4.84607190143, 568.0678182159],
    [0.00000001939, 2.20836538491, 1065.0423736441],
    [0.00000001972, 2.6720409838, 2428.2860005177],
    [0.0000000208, 3.74170619496, 194.89603068979],
    [0.00000001994, 5.72172751294, 749.8597900499],
    [0.00000001905, 3.51155751559, 1077.7849949374],
    [0.00000001909, 2.72297523968, 2737.0766882065],
    [0.00000001874, 2.75415806536, 555.2075768436],
    [0.00000002388, 4.22827702093, 334.7949344048],
    [0.00000002111, 5.51827565803, 5216.33655531789],
    [0.00000002086, 3.31238187572, 1062.5465089795],
    [0.00000002063, 0.14160166361, 9160.77334553909],
    [0.0000000193, 2.31808019838, 2207.8733580789],
    [0.00000001877, 1.77046886437, 732.93893727761],
    [0.00000001836, 2.50051244655, 1994.08662767389],
    [0.00000001907, 4.49445370726, 824.4983762653],
    [0.00000001819, 5.68655037935, 491.8017469403],
    [0.00000001892, 5.26005735036, 569.29165849331],
    [0.0000000177, 4.43317433717, 842.3944989716],
    [0.00000001786, 5.25911906099, 327.68138740401],
    [0.00000001761, 6.10459116553, 67.424234083],
    [0.00000001872, 0.48305166447, 1169.34443392509],
    [0.00000001951, 1.20156127405, 142.6934676173],
    [0.00000001737, 3.47351315761, 202.0095776906],
    [0.00000001965, 0.65764447635, 9146.54625153749],
    [0.00000001703, 0.22482006123, 2530.8911397693],
    [0.00000001717, 3.13603496824, 380.37158544351],
    [0.00000001684, 2.53972202455, 599.0873068529],
    [0.00000001669, 2.13331218955, 2634.47154895491],
    [0.00000001707, 4.70440451897, 92.2908914382],
    [0.00000001666, 6.08661752005, 1058.66253982621],
    [0.00000002249, 0.32860344346, 852.9525642685],
    [0.00000002105, 0.13724782964, 1059.67393178251],
    [0.00000001971, 4.40376628788, 1883.8803064545],
    [0.00000001682, 3.48278576722, 1905.2209474569],
    [0.00000001591, 3.28337636744, 2435.3995475185],
    [0.0000000187, 0.19806856983, 739.30172475301],
    [0.00000001831, 4.9427534902, 405.0137323901],
    [0.00000001741, 5.44783098353, 1280.0383901115],
    [0.00000001437, 1.72233118576, 1056.7049863659],
    [0.00000001666, 3.55643756155, 1060.5889555192],
    [0.00000001646, 4.89045222906, 299.37021175271],
    [0.00000001423, 0.3544303109, 1464.8832975463],
    [0.00000001879, 1.06964842472, 531.4192552864],
    [0.00000001879, 3.27103722365, 528.4503098698],
    [0.0000000146, 2.99740366174, 1269.743449373],
    [0.00000001684, 2.4772323425, 1364.9719170654],
    [0.00000001453, 6.26510844895, 526.2657538734],
    [0.000000017, 0.15073432597, 725.0746307514],
    [0.0000000136, 3.51016366749, 917.1760975389],
    [0.00000001426, 3.38257862218, 2840.1694624251],
    [0.00000001498, 5.40291606338, 1134.40734624],
    [0.0000000141, 0.25814998758, 1091.86907658711],
    [0.0000000152, 0.66510646757, 977.7306021046],
    [0.00000001747, 1.60904440146, 2324.70559133209],
    [0.00000001288, 5.52938584132, 732.1881777522],
    [0.00000001713, 2.03572918983, 2427.7983655507],
    [0.00000001282, 0.82379362487, 1475.1782382848],
    [0.00000001517, 3.20491072001, 1439.75351563271],
    [0.00000001271, 5.76578238196, 843.145258497],
    [0.00000001308, 1.16466426738, 558.3889705813],
    [0.00000001677, 5.68726278883, 611.1992808273],
    [0.00000001256, 5.98835555735, 2854.8841913937],
    [0.00000001366, 4.72040446216, 1446.8670626335],
    [0.00000001435, 0.2672137782, 991.9576961062],
    [0.00000001144, 0.57883702331, 1482.2917852856],
    [0.00000001142, 2.8238713629, 408.19512612779],
    [0.00000001147, 0.57710279821, 3068.1832868317],
    [0.00000001501, 0.8235614149, 75.0254160508],
    [0.00000001226, 5.02777555864, 1141.3778808889],
    [0.00000001323, 0.45303236447, 284.39235822571],
    [0.0000000115, 3.64731637589, 430.2865266556],
    [0.00000001292, 3.22691222108, 1994.5742626409],
    [0.00000001226, 0.90830574042, 372.77040347569],
    [0.00000001132, 5.19504872814, 1063.8185333667],
    [0.00000001079, 1.83169919397, 1483.042544811],
    [0.00000001111, 3.09681405003, 2413.5712715491],
    [0.00000001252, 1.06008408031, 473.31243127551],
    [0.00000001242, 4.51992844109, 539.4960101337],
    [0.00000001242, 2.96234986087, 520.37355502251],
    [0.00000001169, 0.37626190654, 386.9974974773],
    [0.00000001003, 6.17382979199, 216.9874312176],
    [0.0000000103, 5.35594718648, 850.25880549781],
    [0.00000001165, 3.23424220409, 2758.9049641759],
    [0.00000000984, 5.54057958497, 522.7730514675],
    [0.00000000984, 1.94169871699, 537.09651368871],
    [0.00000001015, 0.5181976671, 451.2210307477],
    [0.0000000131, 4.02666314741, 1354.6769763269],
    [0.00000001121, 0.67317844435, 4164.0681721295],
    [0.00000000956, 2.02124975965, 2950.8634186115],
    [0.0000000094, 0.3362749872, 39.6006933987],
    [0.00000000949, 2.09328292248, 1475.9289978102],
    [0.00000000992, 2.88019144631, 1969.4444807273],
    [0.00000000935, 2.32097978196, 3053.46855786309],
    [0.00000001085, 3.28059335022, 586.5571338807],
    [0.00000000901, 2.95406440747, 248.9676355736],
    [0.00000000894, 6.19201666773, 2847.28300942589],
    [0.00000000948, 3.23576370557, 2221.6128171135],
    [0.00000000923, 1.57948501053, 2421.1724535169],
    [0.0000000107, 4.12769395162, 2200.2721761111],
    [0.00000001169, 0.96073817242, 100.4012761803],
    [0.00000001005, 5.20924948749, 1432.6399686319],
    [0.00000001017, 2.1032629136, 8094.2778683491],
    [0.00000000984, 5.02707289654, 537.0001454691],
    [0.00000000984, 2.45520540542, 522.8694196871],
    [0.00000001118, 2.99407073283, 416.547067621],
    [0.00000000914, 4.24495681812, 1140.8902459219],
    [0.00000000977, 6.06165201031, 312.9666584354],
    [0.0000000084, 2.42530575361, 1579.0217720288],
    [0.00000000891, 1.62042692734, 486.64575339981],
    [0.00000000849, 5.66050445306, 834.7933170038],
    [0.00000000926, 1.06469662901, 532.6285413488],
    [0.00000000832, 3.82248800441, 608.64853440851],
    [0.00000000975, 1.83569716432, 21.0968235189],
    [0.00000000794, 0.55277759585, 1791.5701079414],
    [0.00000001006, 3.29673383179, 2310.9661322975],
    [0.00000000825, 0.24960267153, 8616.85528644289],
    [0.00000000827, 2.11307142672, 2545.6058687379],
    [0.00000000955, 5.80717048495, 760.01171843649],
    [0.00000000955, 5.80717048495, 760.4993534035],
    [0.00000000936, 5.99339737103, 155.53915477459],
    [0.00000000779, 1.83263011252, 1792.3208674668],
    [0.00000000766, 2.28443434916, 3811.1733473643],
    [0.00000000773, 2.27805515523, 738.814089786],
    [0.00000000788, 3.85951320467, 732.45130231059],
    [0.00000000801, 1.48502354739, 77204.08367704989],
    [0.00000000937, 4.69566509817, 297.9888049084],
    [0.00000000779, 5.3609500464, 538.0115374254],
    [0.00000000779, 2.12132825556, 521.8580277308],
    [0.00000000755, 0.5334628948, 8631.0823804445],
    [0.00000000743, 5.0691445109, 1060.1470125345],
    [0.0000000079, 4.76601235989, 902.94900353731],
    [0.00000000897, 5.90672024499, 1485.7363035817],
    [0.00000000991, 1.76419853445, 2744.1902352073],
    [0.0000000074, 0.93130456921, 277.2788112249],
    [0.0000000078, 0.67747505651, 606.2008538537],
    [0.00000000738, 3.53234955097, 4856.32818355191],
    [0.00000000799, 2.72025873636, 573.2238117564],
    [0.00000000802, 3.92777211068, 984.8441491054],
    [0.00000000761, 2.31403909443, 2744.6778701743],
    [0.00000000735, 5.48605031473, 4650.1426351147],
    [0.00000000721, 2.25748057238, 731.70054278519],
    [0.0000000085, 3.90105539794, 775.4772069305],
    [0.00000000717, 3.64971882351, 5746.0275204125],
    [0.00000000754, 4.5824179303, 202.4972126576],
    [0.00000000787, 6.16479913324, 320.0802054362],
    [0.00000000739, 5.82129294779, 967.57867371801],
    [0.00000000744, 1.8155779072, 2847.77064439291],
    [0.00000000684, 0.30776904368, 1798.68365494221],
    [0.000000007, 6.09650846364, 572.473052231],
    [0.000000007, 4.5273624919, 487.3965129252],
    [0.0000000069, 6.09169936894, 2118.5200428949],
    [0.0000000067, 1.19443093892, 245.2986068689],
    [0.00000000668, 3.63109061354, 739.5648493114],
    [0.00000000667, 0.87583989763, 1013.1553247567],
    [0.00000000762, 4.8539754204, 9153.6597985383],
    [0.00000000711, 3.1116985257, 3156.5613320817],
    [0.00000000679, 3.67936511602, 24498.58642880689],
    [0.00000000729, 0.09495555814, 4547.04986089611],
    [0.00000000692, 6.19117624873, 5062.5137319891],
    [0.00000000649, 1.56313876075, 1799.4344144676],
    [0.00000000677, 0.68187945383, 10.051123255],
    [0.00000000784, 0.71180416773, 3281.4823822697],
    [0.00000000733, 3.85073191118, 453.66871130251],
    [0.00000000643, 2.57202346935, 2310.4784973305],
    [0.00000000658, 0.00955649379, 305.85311143459],
    [0.00000000784, 0.92101367041, 74.53778108379],
    [0.00000000704, 0.42049120814, 5165.60650620771],
    [0.00000000648, 5.17262659684, 1382.64352936309],
    [0.00000000786, 0.17119550214, 1290.19031849811],
    [0.00000000844, 4.57333845552, 312.21589891],
    [0.00000000703, 3.18188887722, 2288.1002260279],
    [0.00000000703, 3.68329176097, 2273.8731320263],
    [0.00000000797, 1.30518182972, 2641.0974609887],
    [0.00000000635, 0.5743861415, 397.9001853893],
    [0.00000000607, 2.87691632991, 1689.2280932482],
    [0.00000000626, 1.9630421127, 2524.2652277355],
    [0.00000000636, 3.42015645415, 511.2879003464],
    [0.00000000613, 5.27453086724, 1037.7974717033],
    [0.00000000614, 4.75169588095, 2957.9769656123],
    [0.00000000747, 3.57894990009, 5223.4501023187],
    [0.00000000606, 5.48577834442, 1751.2957139325],
    [0.00000000779, 5.87445673484, 523.7844434238],
    [0.00000000779, 1.60782156712, 536.08512173241],
    [0.00000000607, 2.92319803825, 2133.2347718635],
    [0.00000000744, 1.33557042847, 643.32249753521],
    [0.00000000697, 5.3777566479, 1354.18934135989],
    [0.00000000669, 4.82929349311, 5069.6272789899],
    [0.00000000762, 3.36471924953, 1262.6299023722],
    [0.00000000765, 5.32617475783, 927.5911504839],
    [0.0000000072, 3.06031913027, 3075.2968338325],
    [0.00000000573, 1.26296826321, 394.5986794451],
    [0.00000000634, 1.38494179693, 470.1310375378],
    [0.00000000559, 2.49825062445, 445.00125562421],
    [0.00000000671, 3.1585173558, 454.6655490438],
    [0.00000000755, 6.14426019579, 105.2966372899],
    [0.00000000567, 0.62012587567, 1887.5493351592],
    [0.00000000593, 4.42709128942, 842.65762352999],
    [0.00000000564, 4.09053029799, 1127.2937992392],
    [0.00000000547, 2.00134392136, 4127.5652170209],
    [0.00000000624, 1.38182148571, 25035.39094090229],
    [0.00000000545, 1.38452164358, 810.90192958261],
    [0.00000000641, 2.77533084404, 305.5899868762],
    [0.00000000593, 6.12084605791, 1063.0702659688],
    [0.00000000574, 4.93770315169, 1699.0353990197],
    [0.00000000616, 1.88320700397, 25021.16384690069],
    [0.00000000721, 3.98272042008, 1819.8812835927],
    [0.00000000537, 3.42267089674, 782.59075393131],
    [0.00000000597, 2.50100642147, 379.8839504765],
    [0.00000000543, 4.69778069172, 216.72430665921],
    [0.00000000552, 1.82100424033, 1268.9926898476],
    [0.00000000534, 1.45757104363, 437.136949098],
    [0.00000000588, 3.86118609001, 460.2946233363],
    [0.00000000524, 2.90061539997, 518.40144734719],
    [0.00000000701, 5.29663931018, 1670.5812110165],
    [0.00000000632, 1.12269993255, 4525.7092198937],
    [0.00000000546, 4.73323913866, 89.10949770051],
    [0.00000000496, 6.08219208052, 3171.2760610503],
    [0.00000000501, 0.04295581721, 32.48714639791],
    [0.00000000508, 3.08019966842, 827.67977000299],
    [0.00000000493, 5.43229903686, 10022.0810975829],
    [0.0000000055, 3.74627720943, 2516.66404576769],
    [0.00000000546, 2.95574391589, 589.7385276184],
    [0.00000000509, 5.0708839042, 4686.6455902233],
    [0.00000000505, 1.78087149512, 754.27957828001],
    [0.00000000479, 4.72565705175, 5223.93773728571],
    [0.00000000461, 0.9954340863, 1595.9426248011],
    [0.00000000472, 5.67013290312, 3163.6748790825],
    [0.00000000472, 2.52854024953, 3164.1625140495],
    [0.00000000509, 0.8455272899, 69.3963417583],
    [0.00000000546, 2.01514901803, 2840.6570973921],
    [0.00000000615, 5.03969710796, 519.15220687259],
    [0.00000000579, 2.45280217192, 525.514994348],
    [0.00000000455, 0.8444157938, 1468.06469128401],
    [0.00000000451, 1.84241635349, 614.868309532],
    [0.00000000451, 0.27109462263, 2107.96197759801],
    [0.0000000045, 5.5430048657, 3480.06674873909],
    [0.0000000045, 2.40141221211, 3480.5543837061],
    [0.00000000447, 1.49071427438, 3267.2552882681],
    [0.00000000467, 1.66996550533, 1490.15609181181],
    [0.00000000472, 3.97777002593, 1457.2821155785],
    [0.00000000462, 0.76906085237, 26617.8379241523],
    [0.0000000044, 3.74033577848, 3384.08752152129],
    [0.0000000044, 0.59874312489, 3384.5751564883],
    [0.00000000453, 6.16538796545, 9154.1474335053],
    [0.0000000044, 3.20211909619, 2538.00468677009],
    [0.00000000616, 4.82336088817, 1560.3748897971],
    [0.00000000437, 5.35668949324, 4966.5345047713],
    [0.00000000433, 5.44090883319, 4700.87268422489],
    [0.00000000439, 1.57953949229, 2108.7127371234],
    [0.00000000452, 4.81735477031, 1551.1836771295],
    [0.00000000483, 5.25822765428, 629.35852809199],
    [0.00000000455, 0.52481636476, 1368.4164353615],
    [0.00000000454, 2.63963867488, 1884.36794142151],
    [0.00000000476, 1.2721747685, 3060.5821048639],
    [0.00000000414, 4.36171182245, 533.37930087419],
    [0.00000000434, 2.83878055329, 622.2449810912],
    [0.00000000434, 2.83878055329, 622.7326160582],
    [0.00000000423, 4.526768671, 415.04804069769],
    [0.00000000411, 0.64284710617, 4539.44867892829],
    [0.00000000411, 3.78443975976, 4539.9363138953],
    [0.00000000507, 0.89077366361, 3252.5405592995],
    [0.00000000401, 5.31716419569, 1040.97886544099],
    [0.00000000424, 1.74548317826, 1254.765595846],
    [0.00000000407, 3.07774750544, 665.27088571111],
    [0.00000000428, 2.52282816585, 12036.21691740469],
    [0.00000000487, 0.27735959651, 1901.7764291608],
    [0.00000000484, 2.76465853394, 1357.8583700646],
    [0.00000000435, 2.99417344584, 2729.96314120569],
    [0.00000000435, 2.99417344584, 2730.45077617271],
    [0.00000000393, 2.13115023199, 3803.5721653965],
    [0.00000000393, 5.27274288558, 3804.0598003635],
    [0.00000000396, 3.86752181242, 1020.2688717575],
    [0.00000000413, 2.47801246921, 1902.5271886862],
    [0.00000000438, 1.11008336467, 611.8299281462],
    [0.00000000404, 3.24724828605, 2042.7416065863],
    [0.00000000412, 6.18108169678, 4863.4417305527],
    [0.00000000379, 1.72808594571, 4443.9570866775],
    [0.00000000528, 4.53641477848, 721.40560204669],
    [0.00000000392, 3.97639191399, 2001.2001746747],
    [0.00000000379, 5.06316213675, 9676.23721663209],
    [0.00000000379, 5.06316213675, 9676.7248515991],
    [0.00000000372, 1.50891676381, 3273.8812003019],
    [0.00000000372, 4.6505094174, 3274.36883526891],
];

const X2: &[Term] = &[
    [0.00202462055, 2.1687209077, 529.9347825781],
    [0.00132313738, 5.46375601476, 0.2438174835],
    [0.00123752958, 4.12933545743, 522.8212355773],
    [0.00121682952, 0.20529040863, 537.0483295789],
    [0.000357197, 5.025916786, 1059.6257476727],
    [0.00011394908, 1.72910824402, 7.3573644843],
    [0.0000705366, 0.73618974864, 1066.7392946735],
    [0.00005684733, 3.62301903765, 1052.51220067191],
    [0.00005262466, 4.26860629303, 515.70768857651],
    [0.00003815469, 5.55769158033, 1589.3167127673],
    [0.00003706857, 0.07620773039, 544.1618765797],
    [0.00001449544, 2.64864661582, 110.45013870291],
    [0.00001046768, 2.32475473247, 426.8420083595],
    [0.0000132248, 1.62777310244, 14.47091148511],
    [0.00000858857, 1.87732946593, 633.0275567967],
    [0.00000887013, 4.66395505443, 526.7533888404],
    [0.00000866197, 5.95310584104, 533.1161763158],
    [0.0000099714, 1.45788897945, 323.74923414091],
    [0.00000563455, 1.62040359556, 949.4194264533],
    [0.00000571107, 3.15712293933, 1045.3986536711],
    [0.00000519207, 5.96329235901, 526.00262931501],
    [0.00000607942, 2.84828776126, 736.1203310153],
    [0.00000506922, 4.64788690486, 533.8669358412],
    [0.00000485331, 1.604616407, 109.9625037359],
    [0.00000475072, 4.21127530175, 529.44714761109],
    [0.0000045827, 1.23999732854, 1596.43025976811],
    [0.00000418781, 2.61159590787, 117.5636857037],
    [0.00000525152, 0.4118402916, 102.84895673509],
    [0.00000374437, 5.55383016603, 95.7354097343],
    [0.00000412815, 0.32973940832, 103.3365917021],
    [0.00000320928, 4.24368441414, 419.72846135871],
    [0.00000322793, 5.98934797904, 2119.00767786191],
    [0.00000302747, 0.27601683091, 205.9417309537],
    [0.00000280926, 3.69548040149, 1582.2031657665],
    [0.00000243003, 3.14355186105, 625.9140097959],
    [0.00000260213, 3.67206938453, 956.53297345411],
    [0.00000223206, 0.8808747454, 433.9555553603],
    [0.00000219874, 1.72167133402, 942.3058794525],
    [0.00000202904, 0.48756623733, 220.6564599223],
    [0.00000196744, 5.99963553149, 1169.83206889211],
    [0.00000171475, 0.62368794765, 6.86972951729],
    [0.00000195569, 5.98737256847, 640.1411037975],
    [0.00000165172, 5.28462686074, 316.6356871401],
    [0.00000163913, 0.52317209564, 1073.85284167431],
    [0.00000164904, 3.55715812496, 1155.6049748905],
    [0.00000138497, 4.42900020166, 508.5941415757],
    [0.0000013564, 0.24898267917, 198.82818395289],
    [0.00000170382, 1.32273885498, 330.8627811417],
    [0.00000123801, 5.24272600896, 743.23387801611],
    [0.00000105922, 2.6732227386, 853.4401992355],
    [0.00000104749, 1.04943852587, 522.3336006103],
    [0.00000115508, 1.14912313221, 309.0345051723],
    [0.00000127421, 2.9893309513, 729.0067840145],
    [0.00000104374, 2.46273763192, 213.5429129215],
    [0.00000074731, 6.19108417338, 551.27542358051],
    [0.00000076056, 4.161471113, 1265.81129610991],
    [0.00000084864, 4.83454215641, 519.63984183961],
    [0.00000085433, 2.5045694838, 213.0552779545],
    [0.0000007025, 1.40859137196, 426.3543733925],
    [0.00000070226, 1.17306752912, 206.42936592071],
    [0.00000065869, 3.83439660231, 839.2131052339],
    [0.00000062918, 4.41103639601, 412.6149143579],
    [0.00000067605, 5.76604168472, 540.2297233166],
    [0.0000007197, 0.1906975589, 419.2408263917],
    [0.00000053452, 1.25726970711, 3.42521122121],
    [0.00000052805, 5.35851382984, 412.12727939089],
    [0.00000055599, 1.47903917952, 21.5844584859],
    [0.00000046667, 0.35527018271, 227.77000692311],
    [0.00000048911, 0.17388705856, 1062.80714141041],
    [0.00000046046, 0.12865245318, 536.5606946119],
    [0.00000049381, 4.53307122517, 1162.7185218913],
    [0.00000039853, 4.40185904785, 1258.6977491091],
    [0.00000038964, 5.39489558888, 309.5221401393],
    [0.00000038082, 5.82106990307, 441.06910236111],
    [0.00000032665, 4.64318627449, 1692.40948698591],
    [0.00000031801, 1.71799573531, 2126.1212248627],
    [0.0000003651, 4.40226967417, 1056.444353935],
    [0.00000040831, 3.33818544372, 1575.08961876571],
    [0.00000031242, 4.56981926575, 618.8004627951],
    [0.00000032827, 0.30468062826, 515.2200536095],
    [0.00000028849, 0.32258423359, 1055.6935944096],
    [0.00000032224, 0.24894992339, 1272.9248431107],
    [0.00000028682, 3.10923644274, 1038.2851066703],
    [0.0000002943, 4.79051983333, 1486.2239385487],
    [0.0000003415, 1.22671657337, 301.9209581715],
    [0.00000032088, 0.95269083826, 625.42637482889],
    [0.0000002417, 3.96546667147, 832.0995582331],
    [0.00000023462, 5.23275815839, 1059.1381127057],
    [0.00000023622, 1.03079849725, 742.74624304909],
    [0.00000025413, 5.36457820071, 1368.9040703285],
    [0.00000025008, 0.10163753957, 2648.6986429565],
    [0.00000019641, 4.86937041561, 1063.55790093581],
    [0.00000020824, 0.24917335293, 1699.5230339867],
    [0.00000018958, 6.04301166316, 838.72547026689],
    [0.00000019085, 1.84501493463, 1479.11039154791],
    [0.00000020467, 6.09881928033, 647.25465079831],
    [0.00000018387, 2.47199072977, 1471.9968445471],
    [0.00000016332, 4.98457997872, 728.5191490475],
    [0.00000018784, 6.11069390571, 735.6326960483],
    [0.0000001314, 1.62064062804, 1376.0176173293],
    [0.00000014219, 2.42409257216, 124.6772327045],
    [0.00000012676, 5.96326773737, 831.6119232661],
    [0.00000012289, 1.04197442517, 10.538758222],
    [0.00000011203, 3.16486860174, 511.7755353134],
    [0.00000012667, 1.06449203791, 963.6465204549],
    [0.00000013805, 3.83367170604, 2111.8941308611],
    [0.00000010749, 1.17035514019, 548.0940298428],
    [0.00000012863, 6.04094024122, 750.3474250169],
    [0.00000012393, 3.91459301015, 1685.2959399851],
    [0.00000012549, 0.60189314422, 941.8182444855],
    [0.00000010468, 1.87537642305, 935.19233245171],
    [0.00000008995, 3.32040576908, 1383.13116433011],
    [0.00000011159, 0.93936211173, 618.3128278281],
    [0.00000007631, 3.48899971728, 632.5399218297],
    [0.00000007503, 0.95949200774, 1603.5438067689],
    [0.00000007708, 0.38373971235, 191.7146369521],
    [0.00000007383, 5.84748639962, 1155.1173399235],
    [0.00000008531, 5.41891495754, 1361.79052332771],
    [0.00000008011, 1.16879967744, 337.9763281425],
    [0.00000007223, 2.27526633054, 88.6218627335],
    [0.00000007778, 6.08089864211, 1052.02456570489],
    [0.00000007476, 3.1664414074, 721.8932370137],
    [0.00000005663, 5.09194448812, 2222.1004520805],
    [0.00000005661, 4.71699843448, 1044.9110187041],
    [0.00000005318, 5.67177401754, 1148.00379292269],
    [0.00000004988, 5.1122830867, 639.6534688305],
    [0.00000005093, 1.01868695076, 106.0303504728],
    [0.00000006533, 1.90999732711, 845.8390172677],
    [0.00000006385, 1.92471190846, 860.55374623631],
    [0.00000004988, 6.12592952219, 99.6675629974],
    [0.00000005571, 4.3852403714, 1795.5022612045],
    [0.00000005541, 3.99278179683, 1049.3308069342],
    [0.00000005247, 0.3121633168, 1258.21011414209],
    [0.00000004445, 5.36838660295, 846.3266522347],
    [0.0000000399, 0.03159217662, 1802.6158082053],
    [0.00000003926, 3.73297740864, 497.69145366371],
    [0.00000003892, 5.41749662246, 302.40859313851],
    [0.00000003809, 2.16830295705, 2.9375762542],
    [0.0000000362, 0.60770824733, 562.1781114925],
    [0.0000000476, 0.65404095225, 934.70469748469],
    [0.00000004154, 0.58444106217, 96.2230447013],
    [0.00000003877, 0.63005503524, 1375.52998236229],
    [0.00000003522, 4.66663934261, 501.4805945749],
    [0.00000003445, 4.10178765579, 1148.49142788971],
    [0.00000003382, 0.17821445242, 234.8835539239],
    [0.00000003592, 5.23722943024, 405.5013673571],
    [0.00000003808, 3.92687517258, 1788.38871420371],
    [0.00000003336, 5.59164932879, 1471.50920958009],
    [0.00000003758, 2.02589350773, 113.6315324406],
    [0.00000003174, 5.47701611962, 448.1826493619],
    [0.00000003698, 5.72579798285, 220.16882495529],
    [0.00000003101, 1.61252122505, 316.14805217309],
    [0.00000002746, 2.60898959388, 81.50831573269],
    [0.00000002816, 5.64817967676, 2015.9149036433],
    [0.00000002754, 0.98878483675, 430.02340209721],
    [0.00000002783, 3.38652113978, 2104.7805838603],
    [0.00000003501, 6.1890795899, 1069.92068841121],
    [0.0000000258, 1.13656236739, 98.91680347199],
    [0.00000002605, 5.15330137752, 611.6869157943],
    [0.00000002955, 0.62556987115, 1592.498106505],
    [0.00000003418, 5.62641717211, 1368.4164353615],
    [0.00000002482, 4.62391263198, 1361.3028883607],
    [0.00000002409, 0.93859403652, 107.2687449652],
    [0.0000000245, 0.25718396069, 948.9317914863],
    [0.00000002454, 4.646713905, 1251.5842021083],
    [0.00000002443, 5.51785304335, 1464.3956625793],
    [0.00000002848, 4.80044770776, 1898.5950354231],
    [0.00000002434, 0.16399375449, 1080.9663886751],
    [0.0000000224, 3.34539121485, 629.846163059],
    [0.00000002676, 1.36442566154, 294.80741117069],
    [0.00000002252, 5.77491969067, 423.66061462181],
    [0.00000002207, 5.98168647453, 106.7811099982],
    [0.00000002966, 2.18772217641, 106.5179854398],
    [0.00000002114, 1.40054172319, 117.0760507367],
    [0.00000002234, 5.28783438446, 6276.2061204741],
    [0.00000002232, 1.36347902456, 6290.4332144757],
    [0.0000000206, 2.18476343972, 2655.8121899573],
    [0.00000002492, 6.26929425827, 1574.6019837987],
    [0.00000002405, 1.83175482621, 1162.23088692429],
    [0.00000002094, 2.69213826264, 13.9832765181],
    [0.00000001997, 4.16493009666, 2008.8013566425],
    [0.00000001998, 5.23976804747, 149.8070146181],
    [0.00000002075, 0.42755107557, 10206.4158166937],
    [0.00000002073, 2.7863828831, 10220.6429106953],
    [0.00000001833, 4.18008301702, 824.9860112323],
    [0.0000000194, 0.3752858138, 199.3158189199],
    [0.00000001989, 0.05550838377, 323.2615991739],
    [0.00000001764, 6.26232235027, 970.7600674557],
    [0.00000002079, 1.73475090893, 1905.70858242391],
    [0.00000001815, 0.03040681609, 1265.32366114289],
    [0.00000001815, 5.85864386233, 558.3889705813],
    [0.00000001819, 5.36203973035, 1165.89991562901],
    [0.00000002303, 0.38034815736, 1251.0965671413],
    [0.00000001797, 0.77607919875, 1585.38455950421],
    [0.00000001785, 4.17120693216, 1159.53712815361],
    [0.00000001719, 4.75204120917, 654.3681977991],
    [0.00000002106, 0.43427607956, 508.10650660869],
    [0.00000001746, 4.42490277475, 1586.13531902961],
    [0.00000001693, 0.29049773833, 1691.9218520189],
    [0.0000000156, 4.0603211124, 2001.68780964171],
    [0.00000001635, 5.33907949351, 1787.9010792367],
    [0.00000001492, 1.04533558456, 422.9098550964],
    [0.00000001558, 4.80176978113, 636.2089505344],
    [0.00000001753, 0.13061364698, 757.4609720177],
    [0.00000001757, 0.60186557399, 3178.38960805111],
    [0.00000001411, 3.25105098307, 956.04533848709],
    [0.00000001925, 3.26959207194, 1567.9760717649],
    [0.00000001563, 4.39444066103, 1891.4814884223],
    [0.00000001383, 3.30206953671, 5230.5636493195],
    [0.00000001393, 4.0748965414, 1280.0383901115],
    [0.00000001381, 0.94379151453, 5216.33655531789],
    [0.00000001548, 2.31717712129, 946.23803271561],
    [0.00000001239, 6.05197725659, 543.6742416127],
    [0.00000001373, 5.88274816049, 1890.9938534553],
    [0.00000001198, 0.79241931733, 326.9306278786],
    [0.0000000122, 0.92943402597, 319.8170808778],
    [0.00000001357, 0.99707936433, 2229.2139990813],
    [0.00000001271, 4.72505663718, 9160.77334553909],
    [0.00000001268, 2.36679203236, 9146.54625153749],
    [0.00000001183, 3.2589060826, 636.95971005981],
    [0.00000001254, 4.50024168543, 433.46792039329],
    [0.0000000118, 5.26395330152, 1780.78753223589],
    [0.00000001421, 5.18461492344, 1678.1823929843],
    [0.00000001111, 5.11243140232, 910.0625505381],
    [0.00000001135, 5.56380149178, 540.98048284201],
    [0.00000001425, 5.3103973783, 1684.80830501809],
    [0.00000001101, 1.9034786434, 518.8890823142],
    [0.00000001052, 2.44195881689, 1493.3374855495],
    [0.00000000954, 0.56086592982, 1066.2516597065],
    [0.00000001305, 2.11338311992, 5223.4501023187],
    [0.00000000932, 3.38781033249, 952.60082019101],
    [0.00000001152, 5.72701789718, 3281.4823822697],
    [0.00000001271, 1.34644154763, 1478.62275658089],
    [0.00000000993, 0.85140525988, 2427.7983655507],
    [0.00000001202, 0.09319048042, 1567.48843679789],
    [0.00000000952, 4.40542256077, 2325.1932262991],
    [0.00000000904, 5.45851579572, 1158.78636862821],
    [0.00000001185, 4.39736411513, 2214.98690507971],
    [0.00000000965, 3.9884108409, 2428.2860005177],
    [0.00000000862, 1.88793880359, 5753.14106741329],
    [0.00000001183, 2.13750411181, 953.3515797164],
    [0.00000000858, 4.03268202733, 749.8597900499],
    [0.00000000857, 4.35000353836, 1677.6947580173],
    [0.00000000896, 2.48010732688, 1272.4372081437],
    [0.00000000838, 3.42424958269, 740.0524842784],
    [0.0000000081, 3.56166190184, 732.93893727761],
    [0.00000000899, 6.16076732455, 1581.7155307995],
    [0.00000001107, 3.10071050352, 1912.8221294247],
    [0.00000001099, 0.06283564514, 21.0968235189],
    [0.00000000856, 1.83949886373, 210.36151918381],
    [0.00000000792, 3.31088624099, 9683.35076363289],
    [0.00000000803, 4.00091268006, 2641.5850959557],
    [0.00000001013, 4.97621633767, 852.9525642685],
    [0.0000000079, 4.03009368633, 1166.6506751544],
    [0.00000000927, 0.83468452012, 202.760337216],
    [0.00000000955, 1.05973862416, 611.1992808273],
    [0.00000000848, 6.24143056133, 824.4983762653],
    [0.00000000721, 2.30689352602, 4693.75913722409],
    [0.00000000732, 0.54378112448, 1141.3778808889],
    [0.00000000717, 5.04553206489, 2538.4923217371],
    [0.00000000764, 2.59169068637, 3789.8327063619],
    [0.00000000757, 0.72064468326, 422.42222012939],
    [0.0000000087, 3.27554624699, 3900.0390275813],
    [0.00000000745, 5.82790167193, 416.059432654],
    [0.00000000786, 3.44863092226, 3590.7607049255],
    [0.00000000722, 2.26242549861, 1809.72935520611],
    [0.00000000731, 6.27879280918, 2008.3137216755],
    [0.00000000784, 0.83516247967, 1795.0146262375],
    [0.00000000655, 3.72870036603, 8623.96883344369],
    [0.00000000859, 6.02318696083, 459.0853372739],
    [0.00000000787, 5.46578436956, 1671.06884598351],
    [0.00000000668, 2.03555764252, 2545.6058687379],
    [0.00000000707, 5.16062924903, 1169.34443392509],
    [0.00000000679, 5.40421465627, 1588.82907780029],
    [0.00000000721, 5.1734515236, 2104.2929488933],
    [0.00000000869, 3.62787610341, 3576.5336109239],
    [0.00000000878, 0.78188086789, 75.0254160508],
    [0.00000000883, 4.44629342777, 3384.5751564883],
    [0.00000000627, 1.03465619593, 405.0137323901],
    [0.00000000776, 0.79670919548, 927.5911504839],
    [0.00000000751, 5.49611274777, 3597.8742519263],
    [0.00000000821, 4.90808802861, 3487.66793070691],
    [0.00000000603, 3.81342348025, 2318.0796792983],
    [0.00000000766, 5.46484704372, 1354.6769763269],
    [0.00000000679, 5.65072392656, 2207.38572311189],
    [0.0000000082, 0.17433301545, 6283.3196674749],
    [0.00000000638, 2.4779388491, 3370.34806248671],
    [0.00000000711, 6.00519368625, 1883.8803064545],
    [0.00000000666, 2.80033054652, 3693.8534791441],
    [0.00000000785, 1.92447383793, 3149.44778508089],
    [0.00000000566, 1.70107169172, 2861.9977383945],
    [0.00000000781, 2.98565268549, 3796.94625336271],
    [0.00000000719, 4.60068400707, 600.7842278823],
    [0.00000000586, 2.40576117729, 732.45130231059],
    [0.00000000546, 2.44839181979, 437.8877086234],
    [0.00000000539, 1.82254051811, 209.12312469139],
    [0.00000000659, 4.16439637438, 2207.8733580789],
    [0.00000000617, 3.66057473715, 2744.6778701743],
    [0.00000000617, 0.51898208356, 2744.1902352073],
    [0.00000000687, 0.58854485387, 209.87388421679],
    [0.00000000566, 3.13556615267, 526.2657538734],
    [0.0000000064, 5.17909893148, 1987.4607156401],
    [0.00000000623, 3.78657888107, 3274.36883526891],
    [0.00000000623, 0.64498622748, 3273.8812003019],
    [0.00000000682, 0.06918162441, 2332.3067732999],
    [0.00000000719, 3.54267214135, 9153.6597985383],
    [0.00000000547, 5.0547541465, 2097.1794018925],
    [0.00000000705, 4.16571456887, 3700.96702614491],
    [0.00000000574, 4.99043344927, 430.7741616226],
    [0.00000000543, 5.59320658894, 1457.2821155785],
    [0.00000000693, 5.04264798056, 2001.2001746747],
    [0.00000000659, 4.53919606995, 3804.0598003635],
    [0.00000000581, 0.58799150667, 2111.40649589409],
    [0.0000000054, 4.56823438295, 2729.96314120569],
    [0.00000000653, 4.5224678979, 2626.8703669871],
    [0.00000000673, 4.65921419822, 416.547067621],
    [0.00000000541, 5.68847817907, 2214.4992701127],
    [0.00000000463, 5.28637314313, 529.88659846831],
    [0.00000000463, 2.20099897893, 529.9829666879],
    [0.00000000453, 0.4752433396, 5753.6287023803],
    [0.00000000499, 3.31827894302, 2421.1724535169],
    [0.00000000456, 4.85909697014, 76.50988875911],
    [0.00000000587, 2.7074047167, 527.4871020233],
    [0.00000000505, 5.77419802762, 532.6285413488],
    [0.00000000582, 4.77848510541, 532.3824631329],
    [0.00000000517, 5.40871139161, 2523.7775927685],
    [0.00000000475, 4.45896757052, 2531.3787747363],
    [0.00000000433, 1.89229373784, 621.98185653281],
    [0.0000000053, 4.89239591125, 512.5262948388],
    [0.0000000053, 2.58988239071, 547.34327031741],
    [0.00000000478, 5.07132599131, 1593.2488660304],
    [0.00000000423, 1.89822370785, 9683.8383985999],
    [0.00000000592, 0.09761552238, 2324.70559133209],
    [0.0000000041, 2.56036863491, 2751.30378220809],
    [0.00000000507, 0.52941934961, 1243.98302014049],
    [0.00000000521, 3.03081020519, 4216.4308972379],
    [0.00000000458, 5.60102642086, 629.0954035336],
    [0.00000000508, 4.89635261381, 1994.5742626409],
    [0.00000000508, 4.89635261381, 1994.08662767389],
    [0.00000000452, 2.67905981945, 3.6883357796],
    [0.00000000527, 4.4123934234, 597.60283414461],
    [0.00000000527, 6.21147753215, 462.2667310116],
    [0.00000000555, 3.37057288042, 3892.92548058051],
    [0.00000000464, 1.74325066579, 1905.2209474569],
    [0.00000000535, 4.17138356606, 2943.74987161071],
    [0.00000000535, 4.17138356606, 2943.26223664369],
    [0.0000000045, 5.30706754834, 3914.26612158291],
    [0.0000000039, 5.69507695721, 2751.79141717511],
    [0.00000000511, 6.03743992199, 643.32249753521],
    [0.00000000431, 2.42207911772, 849.5080459724],
    [0.00000000464, 4.69682366854, 2633.98391398789],
    [0.00000000486, 4.84373317918, 2303.8525852967],
    [0.00000000412, 1.48548182287, 2758.9049641759],
    [0.00000000423, 5.88986413302, 1898.10740045609],
    [0.00000000457, 3.69523724581, 519.15220687259],
    [0.0000000053, 1.25410178254, 2221.6128171135],
    [0.00000000443, 0.57624758775, 89.10949770051],
    [0.00000000478, 5.10332943513, 2420.68481854989],
];

const X3: &[Term] = &[
    [0.00016990902, 5.84326964724, 522.8212355773],
    [0.00016795793, 4.75643108252, 537.0483295789],
    [0.00005535565, 0.69030286987, 0.2438174835],
    [0.00001711756, 3.371505037, 1059.6257476727],
    [0.00001437893, 5.97752044582, 515.70768857651],
    [0.00001080832, 5.4098268642, 1066.7392946735],
    [0.00001014927, 4.64326947068, 544.1618765797],
    [0.0000108032, 6.20988832893, 7.3573644843],
    [0.00000700816, 5.48708920252, 1052.51220067191],
    [0.0000024529, 4.20564828134, 1589.3167127673],
    [0.00000301422, 6.18874877941, 14.47091148511],
    [0.0000023342, 1.79483227465, 529.9347825781],
    [0.00000141715, 3.21962130849, 529.44714761109],
    [0.00000134439, 4.93447341944, 1045.3986536711],
    [0.00000078118, 6.00083895472, 1596.43025976811],
    [0.00000076833, 0.88537843817, 117.5636857037],
    [0.00000092926, 5.97429663193, 323.74923414091],
    [0.00000078223, 0.68857971258, 110.45013870291],
    [0.00000065879, 6.20010983926, 109.9625037359],
    [0.00000058147, 6.14329253529, 508.5941415757],
    [0.00000051718, 1.01900575462, 95.7354097343],
    [0.00000058, 0.45369239592, 426.8420083595],
    [0.00000047055, 5.14517645295, 1073.85284167431],
    [0.00000041297, 3.6171463067, 633.0275567967],
    [0.00000056002, 4.58170066805, 736.1203310153],
    [0.0000004059, 3.44189359091, 942.3058794525],
    [0.00000036838, 4.76515425506, 625.9140097959],
    [0.00000032307, 4.46032442444, 551.27542358051],
    [0.00000038649, 5.90144372395, 330.8627811417],
    [0.00000031637, 5.57280111823, 1582.2031657665],
    [0.00000032315, 5.45702982437, 433.9555553603],
    [0.00000037135, 2.05207397741, 103.3365917021],
    [0.00000027869, 5.02736594295, 220.6564599223],
    [0.0000002713, 4.72533930097, 2119.00767786191],
    [0.00000027831, 3.47658936637, 949.4194264533],
    [0.00000026529, 4.28803355, 1169.83206889211],
    [0.00000026303, 5.95970150804, 419.72846135871],
    [0.00000027724, 5.01596447062, 6.86972951729],
    [0.00000028942, 4.70013339156, 729.0067840145],
    [0.00000024801, 1.98471609425, 198.82818395289],
    [0.00000022666, 5.28389674207, 1155.6049748905],
    [0.00000022463, 2.05657515244, 956.53297345411],
    [0.00000024855, 0.38561886393, 519.63984183961],
    [0.00000017587, 6.09056550431, 21.5844584859],
    [0.00000020511, 3.90902530966, 540.2297233166],
    [0.00000017573, 2.2877574218, 205.9417309537],
    [0.00000019314, 4.20495563145, 640.1411037975],
    [0.0000001385, 1.05364244327, 853.4401992355],
    [0.00000013374, 4.92762205841, 227.77000692311],
    [0.00000012226, 3.01621301164, 522.3336006103],
    [0.00000011511, 4.04684166302, 441.06910236111],
    [0.00000011785, 6.11408212844, 412.6149143579],
    [0.00000009912, 2.91727446112, 206.42936592071],
    [0.00000009439, 0.08289221852, 618.8004627951],
    [0.00000009398, 4.8424664055, 1038.2851066703],
    [0.00000009377, 5.60289942767, 839.2131052339],
    [0.00000009606, 6.0116915358, 426.3543733925],
    [0.00000011272, 2.94227399823, 309.0345051723],
    [0.00000008495, 4.87340017026, 536.5606946119],
    [0.00000007775, 0.77828391265, 316.6356871401],
    [0.00000007402, 0.87870227189, 412.12727939089],
    [0.00000009022, 5.05061886203, 1575.08961876571],
    [0.0000000722, 6.1123937629, 1258.6977491091],
    [0.00000006726, 5.70739192447, 832.0995582331],
    [0.00000006944, 0.79854239865, 309.5221401393],
    [0.00000007778, 2.92871658834, 301.9209581715],
    [0.00000007986, 0.83091189689, 213.0552779545],
    [0.00000005933, 0.24709144312, 2126.1212248627],
    [0.00000005844, 3.31006297989, 743.23387801611],
    [0.00000005965, 2.10263322732, 515.2200536095],
    [0.00000004458, 3.94363208534, 1059.1381127057],
    [0.00000003905, 5.84264336718, 1265.81129610991],
    [0.00000004118, 0.75516336086, 124.6772327045],
    [0.00000003669, 3.41470956201, 1486.2239385487],
    [0.00000003534, 2.8164140541, 625.42637482889],
    [0.00000003134, 4.93499952524, 1699.5230339867],
    [0.00000002973, 5.75709909562, 742.74624304909],
    [0.00000002686, 4.21604360019, 88.6218627335],
    [0.00000003079, 3.56661827942, 935.19233245171],
    [0.00000002579, 5.5250955405, 1062.80714141041],
    [0.00000002378, 5.22398482496, 2648.6986429565],
    [0.00000002346, 0.57872206639, 728.5191490475],
    [0.00000003011, 4.13745406105, 647.25465079831],
    [0.00000002322, 5.62530333683, 1603.5438067689],
    [0.00000002809, 5.09173475362, 1272.9248431107],
    [0.00000002701, 4.29236849013, 1471.9968445471],
    [0.00000002369, 4.87717253226, 721.8932370137],
    [0.00000002359, 5.7442742381, 337.9763281425],
    [0.00000002423, 2.7144776575, 618.3128278281],
    [0.0000000207, 1.48052642228, 831.6119232661],
    [0.00000001958, 5.45174663546, 526.7533888404],
    [0.00000001935, 2.01598572418, 533.1161763158],
    [0.00000002297, 0.82936512542, 1368.9040703285],
    [0.00000002015, 2.11557967911, 191.7146369521],
    [0.00000002184, 5.63673637257, 963.6465204549],
    [0.00000001685, 0.02501611955, 1685.2959399851],
    [0.00000001816, 3.53877940742, 1162.7185218913],
    [0.00000001733, 4.27157077977, 750.3474250169],
    [0.00000001699, 5.67639711035, 1055.6935944096],
    [0.00000001717, 3.76114243385, 448.1826493619],
    [0.00000001811, 0.22568163048, 860.55374623631],
    [0.00000001432, 4.43210549604, 81.50831573269],
    [0.00000001779, 4.1752803644, 1056.444353935],
    [0.00000001397, 0.57951822575, 611.6869157943],
    [0.00000001563, 1.99224070438, 838.72547026689],
    [0.00000001726, 0.87041746914, 1361.79052332771],
    [0.00000001152, 1.70030030447, 1383.13116433011],
    [0.000000012, 2.12159906502, 632.5399218297],
    [0.00000001145, 0.71912374834, 405.5013673571],
    [0.00000001078, 3.60318956091, 1479.11039154791],
    [0.00000001223, 4.5947044513, 21.0968235189],
    [0.00000001051, 2.88376336111, 526.00262931501],
    [0.00000001414, 2.28596268994, 941.8182444855],
    [0.0000000103, 4.60899071471, 533.8669358412],
    [0.00000001211, 4.41389386454, 1069.92068841121],
    [0.0000000124, 2.35782844542, 934.70469748469],
    [0.00000000944, 0.29242241358, 1044.9110187041],
    [0.00000001091, 5.67396621358, 2111.8941308611],
    [0.00000000986, 3.57242992336, 2097.1794018925],
    [0.00000000967, 3.71520398332, 1588.82907780029],
    [0.00000000939, 1.24033341734, 13.9832765181],
    [0.0000000087, 3.50165707483, 639.6534688305],
    [0.00000001013, 0.7350941439, 1049.3308069342],
    [0.00000000989, 1.29758643303, 1148.00379292269],
    [0.00000001043, 4.55359910492, 1080.9663886751],
    [0.00000000824, 2.60527227567, 433.46792039329],
    [0.00000001002, 5.58426670661, 1788.38871420371],
    [0.00000000823, 3.61010169574, 654.3681977991],
    [0.00000000801, 4.98281196861, 1375.52998236229],
    [0.0000000089, 3.08710678609, 294.80741117069],
    [0.00000000763, 4.57978148957, 2421.1724535169],
    [0.00000000793, 4.53708667061, 234.8835539239],
    [0.00000000752, 6.13454078435, 1251.5842021083],
    [0.00000000788, 0.83160211061, 302.40859313851],
    [0.00000000719, 1.7141318859, 1787.9010792367],
    [0.0000000076, 5.06618363392, 2104.7805838603],
    [0.00000000839, 0.13142328969, 1898.5950354231],
    [0.00000000962, 0.09321612606, 2318.0796792983],
    [0.00000000832, 0.14656820498, 2001.68780964171],
    [0.0000000093, 2.0139332012, 96.2230447013],
    [0.00000000879, 0.21241160083, 845.8390172677],
    [0.0000000078, 5.93658042409, 611.1992808273],
    [0.000000009, 3.12757954089, 1162.23088692429],
    [0.00000000759, 1.6404350478, 2008.3137216755],
    [0.00000000715, 0.86869868609, 1464.3956625793],
    [0.0000000078, 6.10062998423, 2214.98690507971],
    [0.00000000679, 3.2684762266, 2435.3995475185],
    [0.00000000809, 0.41722409643, 1994.5742626409],
    [0.00000000772, 3.89077003744, 220.16882495529],
    [0.00000000622, 0.43134297347, 316.14805217309],
    [0.00000000612, 5.5446590047, 749.8597900499],
    [0.00000000612, 5.8447654352, 117.0760507367],
    [0.00000000713, 4.4514190469, 1140.8902459219],
    [0.00000000626, 2.69322845144, 1692.40948698591],
    [0.00000000676, 5.06415053228, 2840.6570973921],
    [0.00000000594, 6.08554261343, 102.84895673509],
    [0.0000000079, 1.96038787639, 1251.0965671413],
    [0.00000000756, 6.21273062765, 1148.49142788971],
    [0.00000000568, 2.4156133981, 1141.3778808889],
    [0.00000000616, 5.32006450469, 2524.2652277355],
    [0.0000000056, 1.32052284871, 2104.2929488933],
    [0.00000000686, 6.16886011032, 2627.3580019541],
    [0.0000000072, 2.07248159341, 1258.21011414209],
    [0.00000000733, 1.4069210808, 1884.36794142151],
    [0.00000000583, 3.0703257515, 2751.79141717511],
    [0.00000000546, 4.3052395781, 543.6742416127],
    [0.0000000053, 5.36356787938, 1066.2516597065],
    [0.00000000581, 0.7404067565, 1780.78753223589],
    [0.00000000523, 2.35523231154, 1471.50920958009],
    [0.00000000508, 1.53637927432, 508.10650660869],
    [0.00000000645, 5.04939320209, 2015.9149036433],
    [0.00000000553, 3.77158096643, 852.9525642685],
    [0.0000000048, 1.48751125961, 1677.6947580173],
    [0.0000000048, 1.48751125961, 1678.1823929843],
    [0.00000000618, 4.58568946876, 1905.70858242391],
    [0.00000000463, 2.69346041416, 89.10949770051],
    [0.00000000512, 1.92658763463, 1155.1173399235],
    [0.00000000497, 5.24109179268, 1376.0176173293],
    [0.00000000529, 3.9864620366, 1802.6158082053],
    [0.00000000617, 6.1262130593, 2634.47154895491],
    [0.00000000459, 4.38908201999, 1691.9218520189],
    [0.00000000503, 5.14894098049, 948.9317914863],
    [0.00000000547, 0.16414935856, 2310.9661322975],
    [0.00000000432, 2.24745181738, 1567.48843679789],
    [0.00000000432, 5.38904447097, 1567.9760717649],
    [0.00000000419, 0.18825223729, 1361.3028883607],
    [0.00000000415, 1.22669638769, 558.3889705813],
    [0.00000000415, 6.25558191427, 501.4805945749],
    [0.00000000413, 5.02515661889, 1883.8803064545],
    [0.00000000436, 4.68517073519, 1464.8832975463],
];

const X4: &[Term] = &[
    [0.00001739145, 2.99660018877, 537.0483295789],
    [0.00001740807, 1.29193923641, 522.8212355773],
    [0.00000593812, 5.24154438099, 529.9347825781],
    [0.00000303714, 1.42080900852, 515.70768857651],
    [0.00000216971, 2.90416346781, 544.1618765797],
    [0.00000201301, 2.2314736759, 0.2438174835],
    [0.00000128314, 3.79998656469, 1066.7392946735],
    [0.00000084519, 4.38013747176, 7.3573644843],
    [0.00000066713, 1.025698696, 1052.51220067191],
    [0.00000050914, 4.4605004771, 14.47091148511],
    [0.00000056189, 1.24300511536, 1059.6257476727],
    [0.00000023551, 0.46257856947, 1045.3986536711],
    [0.00000014975, 1.64416256689, 508.5941415757],
    [0.0000001232, 2.7590307603, 1589.3167127673],
    [0.00000010412, 3.45236443524, 1073.85284167431],
    [0.00000010436, 4.47365597327, 1596.43025976811],
    [0.00000010171, 5.4319950716, 117.5636857037],
    [0.00000007028, 4.53417325848, 109.9625037359],
    [0.0000000731, 2.57204763203, 551.27542358051],
    [0.00000005867, 2.76327576305, 95.7354097343],
    [0.00000005482, 4.10723362761, 323.74923414091],
    [0.00000005308, 4.17493851179, 330.8627811417],
    [0.00000005155, 5.15140142409, 942.3058794525],
    [0.00000004404, 0.12688032419, 729.0067840145],
    [0.00000003429, 0.28270437324, 625.9140097959],
    [0.00000003596, 4.90660665484, 110.45013870291],
    [0.00000003379, 3.68348076405, 198.82818395289],
    [0.0000000287, 1.39677778907, 529.44714761109],
    [0.00000003465, 0.05238096193, 736.1203310153],
    [0.00000002781, 1.08815967748, 1582.2031657665],
    [0.0000000271, 2.38998980124, 441.06910236111],
    [0.00000002621, 2.53533210188, 1169.83206889211],
    [0.00000002851, 3.77906778388, 103.3365917021],
    [0.00000003222, 3.34043716023, 433.9555553603],
    [0.00000002252, 0.76740108556, 1155.6049748905],
    [0.00000002643, 4.66187220612, 426.8420083595],
    [0.00000002565, 6.07676238286, 6.86972951729],
    [0.00000002154, 1.93925275699, 618.8004627951],
    [0.00000002044, 1.48052835765, 419.72846135871],
    [0.00000001513, 3.17740670423, 220.6564599223],
    [0.00000001619, 5.33278235904, 633.0275567967],
    [0.00000001503, 3.23684234354, 2119.00767786191],
    [0.00000001422, 3.21419588854, 227.77000692311],
    [0.00000001448, 0.6354863383, 1575.08961876571],
    [0.00000001354, 0.37531194856, 956.53297345411],
    [0.00000001398, 4.66226122647, 301.9209581715],
    [0.00000001551, 2.51719031322, 640.1411037975],
    [0.00000001193, 5.69090306, 853.4401992355],
    [0.00000001228, 3.32529407238, 536.5606946119],
    [0.00000001153, 4.24056902908, 426.3543733925],
    [0.00000001111, 1.82993073798, 309.5221401393],
    [0.00000001322, 1.52760953063, 412.6149143579],
    [0.00000001137, 1.63346191003, 1258.6977491091],
    [0.00000000987, 5.01376257502, 522.3336006103],
    [0.00000000937, 1.26232145651, 618.3128278281],
    [0.0000000083, 2.55897013457, 412.12727939089],
    [0.00000000868, 0.67939405545, 1038.2851066703],
    [0.00000000819, 0.85929624974, 742.74624304909],
    [0.00000000952, 0.08637090339, 831.6119232661],
    [0.00000000903, 5.28542287743, 949.4194264533],
    [0.0000000074, 1.11419070098, 832.0995582331],
    [0.00000000726, 1.10542550627, 839.2131052339],
    [0.0000000089, 2.70182272881, 647.25465079831],
    [0.00000000672, 3.82581500735, 102.84895673509],
    [0.00000000598, 4.03229295405, 337.9763281425],
    [0.00000000711, 3.79919685217, 515.2200536095],
    [0.00000000557, 2.29520680686, 1486.2239385487],
    [0.00000000506, 2.29510505753, 1059.1381127057],
    [0.00000000464, 1.33006467962, 117.0760507367],
    [0.00000000479, 6.24011460202, 526.7533888404],
    [0.00000000451, 0.61581620782, 1471.9968445471],
    [0.00000000466, 1.24608768657, 533.1161763158],
    [0.00000000396, 3.90384143043, 1603.5438067689],
];

const X5: &[Term] = &[
    [0.00000131509, 1.09720765135, 537.0483295789],
    [0.00000126839, 3.14566028359, 522.8212355773],
    [0.00000048033, 3.18247744923, 515.70768857651],
    [0.00000034241, 1.11319864554, 544.1618765797],
    [0.00000011284, 2.13882736419, 1066.7392946735],
    [0.00000005229, 2.44608299466, 0.2438174835],
    [0.00000003712, 3.28596952033, 1052.51220067191],
    [0.00000004457, 5.28755623884, 529.9347825781],
    [0.00000001949, 1.73980382124, 1073.85284167431],
    [0.00000001738, 4.99242464275, 1059.6257476727],
    [0.00000001716, 3.05846955779, 1045.3986536711],
    [0.00000000879, 3.22039268284, 508.5941415757],
    [0.00000000886, 4.22728564482, 551.27542358051],
    [0.00000000665, 1.57102457622, 7.3573644843],
    [0.00000000466, 2.85877844081, 1596.43025976811],
];

const Y0: &[Term] = &[
    [5.19591755961, 5.31193570238, 529.9347825781],
    [0.37839498798, 1.82085166331, 0.2438174835],
    [0.12593400247, 5.66155354525, 1059.6257476727],
    [0.01504469362, 5.44173895105, 522.8212355773],
    [0.01476016965, 2.04668425902, 537.0483295789],
    [0.00457751771, 6.0112584614, 1589.3167127673],
    [0.00301186623, 3.60619939116, 7.3573644843],
    [0.00381996183, 3.55684846636, 102.84895673509],
    [0.00193179179, 3.45595232302, 426.8420083595],
    [0.00148291722, 4.58538691397, 110.45013870291],
    [0.001421714, 3.99477000498, 633.0275567967],
    [0.00133443745, 5.60526571675, 213.5429129215],
    [0.0010271945, 4.59936785476, 1052.51220067191],
    [0.00087327523, 1.5630253806, 529.44714761109],
    [0.00114122292, 4.72894061449, 1162.7185218913],
    [0.00072093376, 2.3904322839, 1066.7392946735],
    [0.00059268404, 2.89107868692, 949.4194264533],
    [0.00068329094, 1.86754138371, 846.3266522347],
    [0.00030209026, 4.54186591923, 205.9417309537],
    [0.00034007392, 3.31774226555, 419.2408263917],
    [0.00026616582, 3.28146731015, 323.74923414091],
    [0.00019727427, 0.07815264028, 2119.00767786191],
    [0.0001774954, 5.55480049652, 419.72846135871],
    [0.00017560618, 0.3843213904, 316.6356871401],
    [0.00016308761, 4.16521301086, 736.1203310153],
    [0.00016227856, 5.58096312351, 515.70768857651],
    [0.00014406626, 0.49204486417, 743.23387801611],
    [0.00011421526, 1.91077907185, 544.1618765797],
    [0.00010835166, 1.62316112493, 103.3365917021],
    [0.00012154356, 2.18151132345, 526.00262931501],
    [0.00011992571, 5.29747555409, 533.8669358412],
    [0.00008455662, 1.9080150729, 640.1411037975],
    [0.00008193182, 3.99950988528, 1479.11039154791],
    [0.00008713455, 5.0955410454, 1692.40948698591],
    [0.00007420814, 4.41221626331, 956.53297345411],
    [0.00007565993, 5.61829156567, 1265.81129610991],
    [0.00008202922, 2.9873613225, 735.6326960483],
    [0.00007717111, 4.84373719017, 1582.2031657665],
    [0.00005320837, 5.81736694969, 526.7533888404],
    [0.00005217759, 1.66167068417, 533.1161763158],
    [0.00005238212, 4.68306641983, 522.3336006103],
    [0.00005774716, 3.46781064586, 14.47091148511],
    [0.00005907614, 0.27080776672, 109.9625037359],
    [0.00004575512, 2.18559360651, 1376.0176173293],
    [0.0000393987, 2.73821792955, 1596.43025976811],
    [0.00004568269, 3.71733952931, 95.7354097343],
    [0.00003036375, 5.5157258747, 309.0345051723],
    [0.00002856672, 4.44258466917, 117.5636857037],
    [0.00002820138, 0.55276658901, 632.5399218297],
    [0.00002442859, 2.66976611024, 433.9555553603],
    [0.00002534517, 4.61010280175, 625.9140097959],
    [0.00002329307, 1.22761098421, 213.0552779545],
    [0.00002430903, 2.32333761217, 220.6564599223],
    [0.00002673686, 1.61750799699, 1169.83206889211],
    [0.00002396896, 4.36221151655, 1045.3986536711],
    [0.00002503065, 2.7252608555, 1052.02456570489],
    [0.00001817118, 3.95907641758, 838.72547026689],
    [0.00002014206, 4.8805804749, 1155.6049748905],
    [0.00001501452, 3.03509232132, 942.3058794525],
    [0.00001454916, 4.18897174343, 853.4401992355],
    [0.00001628897, 3.92104093589, 75.0254160508],
    [0.0000110676, 5.64732593309, 6.86972951729],
    [0.00001080777, 0.43950996921, 316.14805217309],
    [0.00001041755, 4.81940326599, 1795.5022612045],
    [0.00000996914, 1.51229276007, 1272.9248431107],
    [0.00000928877, 4.68477803335, 198.82818395289],
    [0.0000093449, 0.42872611846, 2648.6986429565],
    [0.00000858575, 2.14237368311, 529.88659846831],
    [0.00000858481, 5.34018482611, 529.9829666879],
    [0.00001088006, 5.84659040992, 527.4871020233],
    [0.00001080077, 1.63448618678, 532.3824631329],
    [0.00000958229, 6.06015323795, 149.8070146181],
    [0.00000830762, 5.25949378156, 625.42637482889],
    [0.00000815889, 1.66863411356, 1059.1381127057],
    [0.00000838684, 5.82302302292, 3.6883357796],
    [0.00000956674, 0.63174409236, 379.8839504765],
    [0.00000694759, 3.69145164541, 1155.1173399235],
    [0.00000673874, 4.52164149268, 2008.8013566425],
    [0.00000865777, 0.10096193323, 426.3543733925],
    [0.0000089773, 2.48087145339, 1368.4164353615],
    [0.00000667422, 0.38400668832, 1368.9040703285],
    [0.00000747747, 3.13927711168, 330.8627811417],
    [0.0000069362, 6.05103606639, 1063.55790093581],
    [0.00000787813, 5.11429018504, 839.2131052339],
    [0.00000614978, 4.83788756913, 2111.8941308611],
    [0.00000680352, 5.00624167079, 528.9715747316],
    [0.00000678592, 2.47610569321, 530.89799042461],
    [0.0000057413, 5.45801133464, 2222.1004520805],
    [0.00000644748, 3.49842430477, 412.12727939089],
    [0.00000742423, 2.3890651606, 206.42936592071],
    [0.00000563602, 2.49278594908, 1055.6935944096],
    [0.00000559331, 4.30651563744, 729.0067840145],
    [0.00000647539, 3.55462405942, 984.8441491054],
    [0.00000460071, 2.2557507523, 1073.85284167431],
    [0.0000040327, 5.70558430216, 412.6149143579],
    [0.00000539827, 3.74550987414, 38.3768531213],
    [0.00000407824, 1.41749002358, 910.0625505381],
    [0.00000319575, 4.92965704995, 941.8182444855],
    [0.00000301187, 2.49363421546, 1905.70858242391],
    [0.00000330186, 5.17961869781, 948.9317914863],
    [0.00000334161, 5.66579079606, 76.50988875911],
    [0.00000292241, 3.42430216936, 1471.50920958009],
    [0.0000038896, 4.48974750232, 604.7163811454],
    [0.00000387023, 2.95645101689, 455.1531840108],
    [0.0000030353, 3.49353690436, 529.4135177163],
    [0.00000303139, 3.988770799, 530.45604743991],
    [0.00000276704, 5.3671347053, 1486.2239385487],
    [0.00000383222, 3.32437927262, 3.42521122121],
    [0.00000267964, 0.4435862637, 309.5221401393],
    [0.00000270827, 5.75355417511, 1258.6977491091],
    [0.00000264824, 4.51845894459, 536.5606946119],
    [0.00000342262, 2.2292047698, 1684.80830501809],
    [0.00000254392, 2.01389858651, 1062.80714141041],
    [0.00000289891, 5.95965968983, 742.74624304909],
    [0.00000227013, 3.08717315673, 2126.1212248627],
    [0.00000219942, 4.62508932315, 515.2200536095],
    [0.00000304124, 0.18282516849, 6283.3196674749],
    [0.0000028959, 4.54086778359, 305.10235190919],
    [0.00000225217, 1.93067375292, 1699.5230339867],
    [0.00000192734, 5.732417396, 508.5941415757],
    [0.00000181955, 5.49121576696, 1898.5950354231],
    [0.00000180824, 4.33642523532, 1265.32366114289],
    [0.00000234431, 5.63602319498, 1056.444353935],
    [0.00000210412, 2.44959263747, 490.5779066629],
    [0.0000017896, 4.53074727531, 527.01402127131],
    [0.00000184077, 4.02561581206, 1471.9968445471],
    [0.00000177005, 2.95243370745, 532.8555438849],
    [0.00000197754, 4.65708333161, 1575.08961876571],
    [0.00000201548, 3.17115080743, 728.5191490475],
    [0.00000164871, 1.90607027544, 529.1840230527],
    [0.00000164585, 5.57619441078, 530.68554210351],
    [0.00000191757, 5.01987763082, 569.29165849331],
    [0.00000155012, 5.97029570081, 519.63984183961],
    [0.00000216423, 0.97167033032, 453.1810763355],
    [0.0000020827, 1.82244512865, 1439.75351563271],
    [0.00000195461, 5.41018940348, 1685.2959399851],
    [0.00000158021, 2.75745977713, 525.7419968841],
    [0.00000155478, 4.72687069685, 534.1275682721],
    [0.00000142916, 0.78899783107, 11.2895177474],
    [0.00000166137, 2.08946903667, 224.5886131854],
    [0.00000139568, 1.78496043471, 647.25465079831],
    [0.00000194718, 3.73420656967, 1021.49271203491],
    [0.00000142687, 4.63478591519, 1258.21011414209],
    [0.00000136501, 4.43284450396, 99.40443843901],
    [0.00000155156, 0.59258028164, 845.8390172677],
    [0.00000148749, 5.65218277636, 301.9209581715],
    [0.00000142483, 2.1860585445, 227.77000692311],
    [0.00000128042, 0.68370572776, 1162.23088692429],
    [0.00000129196, 3.16003204274, 1787.9010792367],
    [0.00000176884, 1.60517740492, 10213.5293636945],
    [0.00000120579, 1.5122034563, 540.2297233166],
    [0.00000163945, 0.44168564921, 1.7282901918],
    [0.00000135003, 2.22806039362, 540.98048284201],
    [0.00000121846, 2.21825172668, 524.3057082856],
    [0.00000120032, 5.26558395487, 535.56385687061],
    [0.00000124238, 1.81767045547, 983.3596763971],
    [0.00000123682, 1.77349067432, 525.26891613211],
    [0.0000010443, 5.28755763826, 530.0948412725],
    [0.0000010443, 2.1947206637, 529.7747238837],
    [0.00000136458, 1.98358578274, 2001.2001746747],
    [0.00000115988, 1.78467759503, 750.3474250169],
    [0.00000104731, 1.75643097216, 551.27542358051],
    [0.00000100945, 3.93006785022, 1581.7155307995],
    [0.00000116158, 5.71003623422, 534.6006490241],
    [0.00000122805, 3.33550817409, 524.5181566067],
    [0.00000103104, 2.84340091211, 963.6465204549],
    [0.00000115142, 5.0305327328, 2325.1932262991],
    [0.00000120928, 4.14505296195, 535.35140854951],
    [0.00000094293, 1.673139402, 1802.6158082053],
    [0.00000092521, 4.73521093464, 1383.13116433011],
    [0.00000085964, 4.1098488627, 831.6119232661],
    [0.00000091882, 1.46390569496, 441.06910236111],
    [0.00000090884, 1.07143309047, 4.1759707466],
    [0.00000096153, 3.3159843056, 21.5844584859],
    [0.00000073111, 4.24231833095, 415.7963080956],
    [0.00000072096, 5.0304614425, 529.72233425701],
    [0.00000072096, 2.45181685946, 530.1472308992],
    [0.00000095408, 4.36670590047, 35.6685401356],
    [0.00000079513, 5.3946924629, 835.28095197081],
    [0.00000068517, 4.34434516091, 1574.6019837987],
    [0.00000069848, 4.98758055977, 518.8890823142],
    [0.00000073288, 5.26346329278, 832.0995582331],
    [0.0000007379, 2.94904494716, 1044.9110187041],
    [0.00000062635, 5.05973221161, 2214.98690507971],
    [0.00000072372, 4.0790817891, 511.7755353134],
    [0.00000079774, 5.75946246773, 618.8004627951],
    [0.00000084465, 2.02066705387, 834.7933170038],
    [0.00000082357, 1.01171039674, 531.4192552864],
    [0.00000068826, 3.41224512535, 548.0940298428],
    [0.00000058994, 2.89954202085, 2104.2929488933],
    [0.0000006976, 0.41067157485, 98.91680347199],
    [0.00000074013, 2.84831536831, 174.1860370063],
    [0.0000005568, 3.22751869738, 644.0732570606],
    [0.00000077878, 0.16446911156, 528.4503098698],
    [0.00000054479, 3.59326916447, 1898.10740045609],
    [0.00000055045, 3.71209514844, 639.6534688305],
    [0.00000053073, 0.40077660714, 1048.58004740881],
    [0.00000052282, 3.04928542911, 960.4651267172],
    [0.0000005156, 0.07590120615, 514.95692905111],
    [0.00000052703, 5.01527928588, 2641.5850959557],
    [0.00000066188, 2.16852924204, 230.3207533419],
    [0.00000049711, 1.12330761789, 544.9126361051],
    [0.00000049029, 1.60521275283, 387.4851324443],
    [0.0000006596, 5.74241303706, 1364.9719170654],
    [0.00000052715, 6.19618088387, 1057.1780671179],
    [0.00000058796, 5.92972662777, 39.1130584317],
    [0.00000059809, 2.23693717498, 91.8032564712],
    [0.00000046231, 4.96698555728, 2538.4923217371],
    [0.00000048382, 4.0506906376, 2428.2860005177],
    [0.0000006007, 2.2091408665, 1062.0734282275],
    [0.00000056428, 1.74520780023, 2317.5920443313],
    [0.00000059945, 5.60557419941, 494.510059926],
    [0.00000043719, 1.93646240538, 2.20386307129],
    [0.00000048181, 5.35729954844, 618.3128278281],
    [0.00000049751, 0.31062429353, 679.4979797127],
    [0.00000058551, 0.74219345496, 1058.14127496441],
    [0.00000047067, 0.78230316551, 3178.38960805111],
    [0.00000052897, 3.5193830505, 106.7811099982],
    [0.00000041687, 5.68958878057, 1059.67393178251],
    [0.00000041782, 1.8760656286, 71.09326278771],
    [0.00000043674, 5.93139897307, 430.7741616226],
    [0.00000044776, 3.31656958399, 312.70353387701],
    [0.00000048969, 4.37808022467, 1038.2851066703],
    [0.0000003853, 3.84889420737, 1148.00379292269],
    [0.00000052006, 1.89655384425, 565.35950523021],
    [0.00000047878, 5.49999542741, 1375.52998236229],
    [0.00000038108, 5.0024534822, 1788.38871420371],
    [0.00000049073, 2.58173317309, 523.7844434238],
    [0.00000038297, 4.36934356478, 106.5179854398],
    [0.00000041687, 2.49177765294, 1059.5775635629],
    [0.00000037366, 5.83924605505, 2751.79141717511],
    [0.00000041634, 0.09415541149, 1478.62275658089],
    [0.00000041532, 3.87601872923, 1514.5351142],
    [0.00000041308, 3.06772374924, 10.538758222],
    [0.00000040633, 4.90197995789, 18.40306474821],
    [0.000000428, 1.68392525459, 113.89465699899],
    [0.00000048985, 4.63153291545, 3340.8562441833],
    [0.00000044449, 4.90238800208, 536.08512173241],
    [0.00000034928, 5.86589465436, 672.3844327119],
    [0.00000036386, 0.45310476388, 1361.79052332771],
    [0.00000036844, 3.3155238141, 530.195415009],
    [0.00000036844, 4.16675448786, 529.6741501472],
    [0.00000034444, 4.06056429191, 1890.9938534553],
    [0.00000041479, 0.20923373847, 1593.2488660304],
    [0.00000046613, 2.16989392147, 1513.05064149171],
    [0.00000032971, 2.27730952602, 522.7730514675],
    [0.00000035418, 5.49008702234, 522.8694196871],
    [0.00000032742, 4.25989553271, 124.6772327045],
    [0.0000003485, 2.92484630853, 1060.5889555192],
    [0.00000030476, 2.81533288955, 1585.38455950421],
    [0.00000029011, 5.8918755925, 121.4958389668],
    [0.00000033477, 1.4010939777, 629.0954035336],
    [0.00000028909, 5.5793657106, 2001.68780964171],
    [0.00000029909, 1.98839129392, 537.0001454691],
    [0.00000027497, 5.20349493393, 537.09651368871],
    [0.00000028353, 3.2956686699, 2214.4992701127],
    [0.00000027748, 2.64291022936, 2420.68481854989],
    [0.00000033057, 4.51374272746, 568.0678182159],
    [0.00000027675, 3.76752390296, 528.6627581909],
    [0.00000029521, 2.73723500563, 1361.3028883607],
    [0.00000027586, 3.71471356005, 531.2068069653],
    [0.0000003393, 4.63376695563, 885.6835281499],
    [0.00000027514, 1.45900145166, 114.38229196601],
    [0.00000024495, 4.07450770524, 99.6675629974],
    [0.00000024344, 3.20297940813, 935.19233245171],
    [0.00000026492, 3.14995415897, 422.9098550964],
    [0.00000030581, 0.04329676173, 142.20583265029],
    [0.00000032993, 5.35577320707, 1058.66253982621],
    [0.00000026693, 4.1553470603, 747.1660312792],
    [0.00000023218, 4.67611113291, 216.9874312176],
    [0.00000031446, 4.79362433774, 437.8877086234],
    [0.0000002399, 4.10871208553, 523.3425004391],
    [0.00000025905, 2.70346670886, 10.8018827804],
    [0.00000030584, 3.14037291034, 1024.20102502061],
    [0.00000022355, 6.15548689757, 106.0303504728],
    [0.00000027098, 5.64808334984, 497.69145366371],
    [0.00000029688, 5.93516522116, 760.01171843649],
    [0.00000026696, 1.62294414819, 1158.78636862821],
    [0.00000025786, 4.19746250367, 636.95971005981],
    [0.00000024825, 4.87212515778, 1134.40734624],
    [0.0000002284, 0.83434687851, 459.0853372739],
    [0.0000002187, 3.37410460471, 536.52706471711],
    [0.00000022257, 5.18257233161, 521.8580277308],
    [0.00000026904, 4.55348699023, 299.37021175271],
    [0.00000020168, 4.63789217577, 2104.7805838603],
    [0.00000019591, 2.60352149776, 1603.5438067689],
    [0.00000023983, 1.51490151538, 2633.98391398789],
    [0.00000023778, 1.81405059728, 562.1781114925],
    [0.00000019633, 2.5569841313, 491.8017469403],
    [0.00000026288, 6.09242729115, 454.6655490438],
    [0.00000021128, 5.0712199969, 934.70469748469],
    [0.00000019074, 0.54048693886, 327.68138740401],
    [0.00000018465, 3.58841586091, 1464.3956625793],
    [0.0000002122, 4.75365640451, 495.9945326343],
    [0.00000024986, 3.56749136042, 860.55374623631],
    [0.00000018596, 0.57894147959, 5.872891776],
    [0.00000024136, 0.56079031346, 380.37158544351],
    [0.00000018303, 3.05720710697, 953.3515797164],
    [0.00000024099, 2.66580382654, 621.98185653281],
    [0.00000019533, 0.33685720004, 1098.9826235879],
    [0.00000017623, 3.77983317632, 2207.38572311189],
    [0.00000018076, 0.42847308235, 600.7842278823],
    [0.00000017281, 4.8546541105, 191.7146369521],
    [0.00000017873, 2.29598676123, 538.0115374254],
    [0.00000017226, 2.68832441082, 2435.3995475185],
    [0.00000021244, 4.71917522298, 1166.6506751544],
    [0.00000020337, 5.96704683966, 1795.0146262375],
    [0.00000016743, 4.81175858246, 2531.3787747363],
    [0.00000019199, 2.72712183072, 563.87503252191],
    [0.00000016833, 2.4372853353, 24.6228398717],
    [0.00000021175, 0.27960745033, 88.6218627335],
    [0.00000016556, 2.28023588713, 2229.2139990813],
    [0.00000016153, 4.90017932817, 1049.3308069342],
    [0.00000019785, 5.64301732154, 505.5557601899],
    [0.00000018422, 2.18247642641, 1969.4444807273],
    [0.00000019816, 2.08941014873, 96.2230447013],
    [0.00000016272, 2.33706582122, 527.22646959241],
    [0.0000001617, 5.14508707196, 532.64309556381],
    [0.0000001551, 5.66925542318, 988.7763023685],
    [0.00000015594, 3.28617425582, 39.6006933987],
    [0.00000015853, 1.45510339077, 501.62360692681],
    [0.00000016153, 2.1823949641, 31.9995114309],
    [0.00000018509, 1.8460217609, 554.31380496631],
    [0.00000015127, 1.98189390748, 460.7822583033],
    [0.00000016461, 4.35420228107, 220.16882495529],
    [0.00000019878, 5.33036403802, 1691.9218520189],
    [0.00000014712, 3.84306627886, 1059.10448281091],
    [0.00000017901, 1.98272465699, 107.2687449652],
    [0.00000014484, 3.28758641825, 1070.6714479366],
    [0.00000015909, 0.96629585192, 4.9096839295],
    [0.00000014674, 6.01692843272, 558.2459582294],
    [0.00000014766, 3.8822408445, 2744.6778701743],
    [0.00000018715, 5.44782508771, 523.71500745461],
    [0.00000014896, 1.36370078487, 1588.82907780029],
    [0.00000017816, 3.7929477083, 74.53778108379],
    [0.00000014616, 3.00562662663, 2530.8911397693],
    [0.00000018292, 3.4056985429, 1151.6728216274],
    [0.00000018426, 2.0344609869, 536.1545577016],
    [0.00000013673, 0.68703780947, 732.1881777522],
    [0.00000013765, 6.04929617915, 67.424234083],
    [0.00000014986, 0.08205821916, 2015.9149036433],
    [0.0000001375, 0.52643748579, 451.2210307477],
    [0.00000013701, 5.78256715764, 1586.13531902961],
    [0.00000013415, 2.38228960626, 2737.0766882065],
    [0.00000013707, 2.03789341879, 498.91529394111],
    [0.00000013957, 2.36417098087, 1592.498106505],
    [0.00000012833, 0.65025343158, 423.66061462181],
    [0.00000012935, 5.50182673109, 599.0873068529],
    [0.00000013524, 3.44876736954, 2655.8121899573],
    [0.00000015347, 4.64705200559, 323.2615991739],
    [0.0000001425, 1.72247897628, 462.2667310116],
    [0.00000014314, 4.07018795871, 1551.1836771295],
    [0.0000001635, 3.38063086403, 1290.19031849811],
    [0.00000012174, 5.62306550613, 2318.0796792983],
    [0.00000014758, 5.80599958132, 945.48727319021],
    [0.00000013727, 4.06971719103, 113.6315324406],
    [0.00000012014, 1.59699399907, 938.3737261894],
    [0.00000012669, 5.59895980244, 597.60283414461],
    [0.00000012684, 5.4451952205, 560.9542712151],
    [0.00000012686, 1.24409527288, 528.2378615487],
    [0.00000012686, 6.23818302908, 531.63170360751],
    [0.00000011902, 0.29922284195, 636.2089505344],
    [0.00000015029, 6.08292509395, 155.53915477459],
    [0.00000014712, 4.33830015465, 1060.1470125345],
    [0.00000013153, 4.24131500267, 34.1840674273],
    [0.00000011492, 2.74650212454, 0.719390363],
    [0.00000011728, 0.66803059115, 608.64853440851],
    [0.00000014802, 2.91983201484, 760.4993534035],
    [0.00000014208, 4.97676580268, 151.2914873264],
    [0.00000013247, 4.74780140574, 5.1728084879],
    [0.00000013608, 5.75341457451, 28.0673581678],
    [0.00000011186, 1.14738473449, 531.3710711766],
    [0.00000011186, 0.05170826029, 528.4984939796],
    [0.00000014801, 1.71286185185, 378.39947776819],
    [0.00000011873, 2.54431600917, 1677.6947580173],
    [0.00000010898, 4.59375119105, 629.846163059],
    [0.00000014422, 2.69020416688, 381.3684231848],
    [0.00000010799, 5.3855620252, 1148.49142788971],
    [0.00000010862, 3.06906378219, 248.9676355736],
    [0.00000010584, 2.85396979697, 430.02340209721],
    [0.0000001424, 3.01342561614, 1173.7642221552],
    [0.00000010278, 4.70239533674, 209.87388421679],
    [0.0000001128, 3.91394243595, 46.71424039951],
    [0.00000010327, 5.95352479669, 606.2008538537],
    [0.0000001327, 2.80639524732, 1041.466500408],
    [0.00000013786, 2.98010668249, 337.9763281425],
    [0.00000010252, 5.63891846478, 1891.4814884223],
    [0.00000013304, 0.85030585719, 63.49208081989],
    [0.00000009721, 5.24565438793, 1159.53712815361],
    [0.00000009974, 3.07602930457, 9.8050450391],
    [0.00000010564, 4.7784476927, 1251.0965671413],
    [0.00000012937, 2.55201590769, 944.7390057923],
    [0.00000012666, 4.49628001198, 721.8932370137],
    [0.00000009141, 3.31988100263, 1780.78753223589],
    [0.00000009377, 3.52298776594, 2523.7775927685],
    [0.00000008992, 1.05072894634, 1165.89991562901],
    [0.00000009074, 2.2765327232, 754.27957828001],
    [0.00000008886, 0.87970824582, 528.71094230071],
    [0.00000008886, 0.31938474896, 531.1586228555],
    [0.00000008815, 0.50994270535, 302.40859313851],
    [0.00000012114, 3.28137353918, 1020.2688717575],
    [0.00000008872, 3.19935594712, 194.89603068979],
    [0.00000010983, 0.29488310355, 1.24065522479],
    [0.0000001219, 4.57593024424, 72.31710306511],
    [0.00000008635, 4.87675285165, 1056.7049863659],
    [0.00000010308, 1.29678542884, 2950.3757836445],
    [0.00000011595, 3.43106394734, 1289.7026835311],
    [0.00000008931, 1.99292771548, 956.04533848709],
    [0.0000001079, 2.13326549126, 529.0410107008],
    [0.0000001079, 5.3490128107, 530.8285544554],
    [0.00000008192, 5.36020095318, 13.9832765181],
    [0.00000007989, 2.2556211431, 1058.87498814731],
    [0.00000010336, 1.83209374906, 73.5409433425],
    [0.00000008394, 1.01712525126, 525.7901809939],
    [0.00000010766, 5.5348038466, 2111.40649589409],
    [0.00000007749, 0.18520854013, 522.0704760519],
    [0.00000008309, 0.18252654751, 534.0793841623],
    [0.00000010415, 3.01801395976, 319.8170808778],
    [0.00000009365, 0.13738783165, 415.3086731286],
    [0.00000007601, 1.01410942526, 537.7990891043],
    [0.00000008635, 3.30118117017, 1062.5465089795],
    [0.00000007859, 5.09973255259, 1065.0423736441],
    [0.00000007602, 5.07538034057, 1063.8185333667],
    [0.00000010315, 1.81132365985, 456.6376567191],
    [0.00000007989, 5.92574529041, 1060.3765071981],
    [0.00000008083, 3.25152658141, 533.37930087419],
    [0.00000007529, 2.72685691181, 2847.28300942589],
    [0.0000000849, 1.21946880524, 202.0095776906],
    [0.00000007329, 3.75411316314, 148.32254190981],
    [0.00000007187, 5.8322713106, 30.7756711535],
    [0.00000009756, 5.09705846628, 2008.3137216755],
    [0.00000008727, 1.02210873113, 1202.0753978065],
    [0.00000007941, 1.93425844896, 2332.3067732999],
    [0.00000006801, 1.23043017312, 1054.9598812267],
    [0.00000008387, 4.41387774831, 2957.9769656123],
    [0.00000007512, 5.35620649098, 952.60082019101],
    [0.00000007552, 4.91464670813, 842.3944989716],
    [0.0000000768, 4.58781712019, 334.7949344048],
    [0.00000009231, 5.41598830183, 2854.8841913937],
    [0.00000008791, 5.81348495155, 483.4643596621],
    [0.00000007389, 0.72681677735, 202.4972126576],
    [0.00000006847, 0.68329056266, 320.5678404032],
    [0.00000008929, 5.67328579883, 603.23190843711],
    [0.0000000652, 2.12029864826, 3053.46855786309],
    [0.00000006721, 5.17441034834, 1912.8221294247],
    [0.00000008859, 2.25656725982, 217.4750661846],
    [0.0000000871, 1.69360357974, 576.4052054941],
    [0.00000007535, 1.43209684879, 1061.110220381],
    [0.00000006826, 0.61078031935, 284.39235822571],
    [0.00000006401, 6.21089623686, 117.0760507367],
    [0.00000006884, 3.68154907894, 277.2788112249],
    [0.00000006632, 1.40967759841, 2.9375762542],
    [0.00000007529, 3.26594046441, 423.17297965479],
    [0.00000006885, 3.41541733477, 946.23803271561],
    [0.000000062, 1.01085916847, 1272.4372081437],
    [0.0000000673, 0.63714531653, 531.5793139808],
    [0.0000000673, 0.56194767825, 528.29025117541],
    [0.00000006259, 4.17880072433, 142.6934676173],
    [0.00000007602, 3.10155768831, 1055.43296197871],
    [0.00000007329, 1.3462335661, 5.97595764],
    [0.00000005901, 5.92152237589, 1251.5842021083],
    [0.00000006013, 5.10743465878, 1035.24672528451],
    [0.00000005953, 2.93486163481, 498.4422131891],
    [0.00000007833, 5.94245831651, 68.90870679129],
    [0.00000006343, 1.1708887775, 199.3158189199],
    [0.00000005843, 5.61675953661, 1276.85699637381],
    [0.00000007666, 3.22002799193, 247.4831628653],
    [0.00000005663, 3.16164223175, 1091.86907658711],
    [0.00000005605, 1.26367531224, 513.4724563428],
    [0.00000005524, 4.60275692299, 2847.77064439291],
    [0.00000007612, 4.10551473719, 352.06040979221],
    [0.00000005914, 3.68583540418, 1054.20912170131],
    [0.00000007627, 0.07913853996, 405.5013673571],
    [0.00000005507, 4.54723285635, 561.4273519671],
    [0.00000005497, 4.40642501831, 810.90192958261],
    [0.00000005666, 6.05825689215, 1064.29161411871],
    [0.00000005378, 6.21860298014, 546.39710881341],
    [0.00000006319, 3.19557491036, 1493.3374855495],
    [0.00000006876, 1.94945842378, 408.19512612779],
    [0.00000005745, 1.20632367499, 430.2865266556],
    [0.00000006791, 5.62982891906, 303.6178792009],
    [0.00000007093, 4.40070510881, 740.0524842784],
    [0.00000006815, 1.54708468197, 1053.9966733802],
    [0.00000005111, 2.62007621305, 1176.9456158929],
    [0.00000005065, 2.54426472948, 1059.4656889783],
    [0.00000006697, 3.5779340381, 685.2301198692],
    [0.00000005674, 4.5762915306, 1567.48843679789],
    [0.00000005759, 4.2344581739, 166.58485503849],
    [0.00000004933, 1.00231605898, 245.2986068689],
    [0.00000005446, 1.85472048115, 757.4609720177],
    [0.00000005053, 0.08352218214, 1678.1823929843],
    [0.00000005999, 2.52195451833, 908.57807782981],
    [0.00000005382, 2.05458907199, 512.66930719071],
    [0.00000004943, 3.25188141823, 2840.1694624251],
    [0.00000005065, 5.63710170403, 1059.7858063671],
    [0.00000005075, 4.81676406685, 508.10650660869],
    [0.00000004955, 1.84826604162, 1069.92068841121],
    [0.00000005153, 5.42768922381, 547.2002579655],
    [0.00000004607, 5.2644221074, 2634.47154895491],
    [0.00000004755, 4.04041807467, 415.04804069769],
    [0.00000004775, 2.3966891609, 1994.08662767389],
    [0.0000000459, 3.05724325625, 2097.1794018925],
    [0.00000004911, 6.22970806427, 512.5262948388],
    [0.00000004553, 1.47995846767, 509.487913453],
    [0.00000004672, 2.03709808328, 234.8835539239],
    [0.00000004578, 5.57782400113, 305.5899868762],
    [0.00000005193, 5.59541519165, 320.0802054362],
    [0.00000006202, 2.81584993974, 26088.1469590577],
    [0.00000005852, 5.17781036835, 2427.7983655507],
    [0.00000004324, 6.00231982961, 550.3816517032],
    [0.0000000441, 0.89841714751, 1127.2937992392],
    [0.00000004238, 1.37716518074, 92.2908914382],
    [0.00000004881, 2.9032135259, 725.0746307514],
    [0.00000004688, 5.54226574385, 504.8050006645],
    [0.00000004432, 3.21149906214, 1490.15609181181],
    [0.00000004144, 1.71460956771, 970.7600674557],
    [0.00000005737, 3.37724812325, 707.809155364],
    [0.00000004256, 2.95543164571, 512.4086747598],
    [0.00000004139, 5.15386793268, 470.1310375378],
    [0.00000004547, 0.52585543495, 857.3723524986],
    [0.00000004431, 4.63632908961, 519.9004742705],
    [0.00000005723, 5.51760124056, 1065.2548219652],
    [0.00000004278, 0.51107431683, 739.30172475301],
    [0.00000005621, 4.76211011081, 280.723329521],
    [0.00000005007, 4.52013629124, 492.06237937121],
    [0.00000003987, 1.06371097161, 448.1826493619],
    [0.00000004559, 1.08649118563, 3266.76765330109],
    [0.00000004072, 3.65895344457, 3061.06973983091],
    [0.00000004072, 4.5268466553, 547.4608903964],
    [0.00000005087, 3.27441637503, 114.6429243969],
    [0.00000004392, 1.93950112163, 555.0645644917],
    [0.00000004733, 0.67137979921, 1087.936923324],
    [0.0000000459, 0.81771313519, 209.12312469139],
    [0.00000004061, 0.84886600079, 1578.2710125034],
    [0.00000004043, 3.31066824827, 917.1760975389],
    [0.00000004781, 0.95570708773, 355.99256305531],
    [0.0000000384, 0.34108693081, 479.532206399],
    [0.00000004229, 5.02030190341, 202.760337216],
    [0.00000005079, 4.1010825294, 100.4012761803],
    [0.00000003809, 5.0440276861, 63.9797157869],
    [0.00000003869, 2.47318190725, 3163.6748790825],
    [0.00000004615, 3.8606919212, 8.32057233081],
    [0.00000004615, 0.71909926761, 7.83293736379],
    [0.00000004628, 2.95946199977, 567.807185785],
    [0.00000004429, 3.33484643205, 1025.6854977289],
    [0.00000004166, 1.09654835252, 1587.832240059],
    [0.00000004232, 2.53213396378, 2042.7416065863],
    [0.00000003934, 3.61075823093, 1894.66288216001],
    [0.00000004119, 3.84993499525, 782.59075393131],
    [0.00000004305, 2.47219780188, 237.9219353097],
    [0.00000004647, 5.82365364657, 294.80741117069],
    [0.00000003571, 2.08868123477, 1080.9663886751],
    [0.00000003908, 0.59904528751, 775.4772069305],
    [0.00000004183, 5.36832575933, 3171.2760610503],
    [0.00000003544, 4.3839604206, 849.5080459724],
    [0.00000004668, 0.5675453171, 391.4172857074],
    [0.00000003825, 3.58651228704, 1013.1553247567],
    [0.0000000449, 4.47294860578, 1066.2516597065],
    [0.00000003497, 2.80136092523, 1059.83819599381],
    [0.00000004592, 6.18306867454, 105.2966372899],
    [0.00000003507, 2.32963957274, 589.7385276184],
    [0.0000000346, 3.00015782763, 210.36151918381],
    [0.00000003472, 0.85727261261, 580.33735875721],
    [0.00000004742, 1.07044014702, 1214.92108496379],
    [0.00000004236, 6.09342108227, 458.5977023069],
    [0.00000004571, 4.85712461466, 2324.70559133209],
    [0.0000000368, 1.21278522879, 547.34327031741],
    [0.00000003342, 0.15031101728, 611.6869157943],
    [0.00000003327, 3.80363745236, 416.059432654],
    [0.00000003357, 3.57120537469, 102.8971408449],
    [0.00000003597, 0.70360923125, 81.50831573269],
    [0.00000003697, 2.78415450903, 326.9306278786],
    [0.00000003305, 5.62616411694, 3068.1832868317],
    [0.00000003332, 0.38986283721, 102.8007726253],
    [0.0000000385, 3.2260306116, 223.1041404771],
    [0.00000003389, 4.40791637427, 1050.0645201171],
    [0.00000003693, 2.30849108411, 100.8889111473],
    [0.0000000352, 5.90372622394, 355.50492808829],
    [0.00000003747, 3.26414742353, 101.88574888859],
    [0.00000003497, 5.38000550828, 1059.4132993516],
    [0.00000004041, 3.71442466403, 80.7575562073],
    [0.00000003215, 5.24772956727, 2207.8733580789],
    [0.0000000335, 3.76399871254, 1077.7849949374],
    [0.00000003628, 4.5681829233, 1567.9760717649],
    [0.00000004303, 0.65966587333, 374.15181032],
    [0.00000003455, 3.42091235598, 489.0934339546],
    [0.00000004402, 2.90784212539, 987.55246209111],
    [0.00000003638, 0.71407157961, 103.81216458159],
    [0.00000003112, 5.91930979689, 422.42222012939],
    [0.00000003124, 1.89592603599, 3369.8604275197],
    [0.00000003303, 2.851252187, 539.96909088571],
    [0.00000003803, 3.64352844828, 852.9525642685],
    [0.00000003982, 5.66129151662, 986.3286218137],
    [0.00000003666, 1.43198782274, 77.9943614674],
    [0.00000004012, 0.62727446399, 668.4522794488],
    [0.00000003922, 0.99606286392, 1215.4087199308],
    [0.00000003967, 1.33281131206, 486.64575339981],
    [0.00000003197, 3.6502366255, 1169.34443392509],
    [0.00000003122, 3.82899115941, 69.3963417583],
    [0.00000003954, 2.04035652666, 1123.3616459761],
    [0.00000003201, 2.09572762487, 145.874861355],
    [0.00000003935, 3.38057342433, 306.58682461749],
    [0.00000002958, 3.08516031897, 531.9405201482],
    [0.00000002958, 4.39711798299, 527.929045008],
    [0.00000003054, 0.64525087742, 654.3681977991],
    [0.00000002909, 4.40702607221, 536.9364549943],
    [0.00000002909, 3.07525222975, 522.9331101619],
    [0.00000003738, 3.63891493774, 977.7306021046],
    [0.00000003893, 4.26177377165, 812.3864022909],
    [0.00000003604, 0.46524982149, 78.4699343469],
    [0.00000002867, 5.79071320564, 1269.743449373],
    [0.00000003118, 4.0613659496, 570.7761312016],
    [0.00000003676, 1.06915971991, 226.07308589371],
    [0.00000003463, 2.60208545891, 1591.76439332211],
    [0.0000000287, 0.26308381178, 1586.8690322125],
    [0.00000002889, 4.31193778169, 504.66198831261],
    [0.00000003107, 0.25809701396, 1905.2209474569],
    [0.00000002833, 3.77574980636, 911.5470232464],
    [0.00000003315, 2.51210337945, 1065.84552279621],
    [0.00000003556, 6.14962768045, 573.2238117564],
    [0.00000002918, 5.73628341762, 967.57867371801],
    [0.00000002676, 0.03275249694, 3281.4823822697],
    [0.00000003689, 1.70487674721, 850.25880549781],
    [0.00000003016, 4.27158737525, 3274.36883526891],
    [0.00000003204, 4.77926383698, 2744.1902352073],
    [0.00000002667, 5.49050260804, 97.9199657307],
    [0.00000002647, 0.88177591711, 134.8291610911],
    [0.00000002715, 3.1696352225, 555.2075768436],
    [0.00000003135, 3.15988503239, 433.46792039329],
    [0.00000002639, 2.26104148377, 144.39038864671],
    [0.00000002912, 4.27421635124, 1883.8803064545],
    [0.00000003601, 0.47145843816, 991.9576961062],
    [0.00000002745, 0.40065346771, 33.6964324603],
    [0.00000002589, 0.44277003092, 93.28772917949],
    [0.00000002531, 1.9580701485, 108.0024581481],
    [0.00000002821, 1.06656582689, 503.1080796351],
    [0.00000002585, 2.99923552183, 3156.5613320817],
    [0.00000003142, 5.99895869762, 520.37355502251],
    [0.00000003142, 4.62490556976, 539.4960101337],
    [0.00000002731, 2.80890465706, 537.16020416351],
    [0.00000002731, 4.6733736449, 522.7093609927],
    [0.00000003288, 0.54732144888, 685.7177548362],
    [0.00000002456, 1.47279271371, 1074.6036011997],
    [0.00000002382, 3.93679555128, 112.8978192577],
    [0.00000002385, 0.89159302945, 1475.1782382848],
    [0.00000002456, 0.42538841262, 1044.6478941457],
    [0.00000002435, 5.46783161031, 824.9860112323],
    [0.00000002637, 0.13252276208, 556.7614855211],
    [0.00000003031, 4.10608213511, 538.5328022872],
    [0.00000003031, 3.37619616684, 521.33676286901],
    [0.00000002342, 1.63307892366, 518.40144734719],
    [0.00000002443, 2.60924692115, 749.8597900499],
    [0.00000003226, 2.87915335731, 536.8358812578],
    [0.00000003226, 4.60312494465, 523.0336838984],
    [0.00000002356, 3.28453581204, 285.61619850311],
    [0.00000002452, 0.62027944096, 1090.6452363097],
    [0.00000002986, 6.19494169694, 491.3141119733],
    [0.00000002323, 4.87403397794, 530.56792202451],
    [0.00000002323, 2.60824432402, 529.3016431317],
    [0.00000003003, 1.51547464417, 108.96566599461],
    [0.00000003049, 2.91433771038, 1438.2690429244],
    [0.00000003159, 5.4733095229, 457.8614969965],
    [0.00000003023, 6.11184318218, 532.9037279947],
    [0.00000003023, 1.37043511978, 526.96583716151],
    [0.00000002581, 4.04501510183, 1483.042544811],
    [0.00000002851, 6.19876101268, 731.70054278519],
    [0.00000002627, 2.23895869315, 1095.0504703248],
    [0.00000002198, 2.83199855971, 2413.5712715491],
    [0.00000002533, 0.10403644084, 12566.3955174663],
    [0.00000002183, 4.47686604255, 2421.1724535169],
    [0.00000002273, 6.03923806707, 1589.3648968771],
    [0.00000002201, 4.15470899026, 2044.2260792946],
    [0.00000002304, 2.8426920013, 1053.47540851841],
    [0.00000002878, 1.28856851089, 28.5549931348],
    [0.00000002523, 1.46775781223, 909.5749155711],
    [0.00000002847, 3.89864676802, 1441.237988341],
    [0.00000002211, 5.00686455045, 376.4394321804],
    [0.00000002767, 5.82488714403, 39.86132582961],
    [0.00000002242, 4.98350060741, 6681.46867088311],
    [0.00000002284, 1.5711121654, 902.94900353731],
    [0.00000002122, 4.38960996491, 543.6742416127],
    [0.00000002251, 2.16205964084, 1067.70250252],
    [0.00000002782, 5.20069642737, 451.69660362719],
    [0.00000002107, 4.35933463496, 824.4983762653],
    [0.00000002308, 4.70844962325, 732.93893727761],
    [0.00000002055, 5.91536534525, 526.2657538734],
    [0.00000002624, 2.11125071189, 1261.8791428468],
    [0.00000002059, 4.36499566626, 1254.765595846],
    [0.00000002523, 0.74912600326, 372.77040347569],
    [0.00000002035, 3.63513892304, 535.7763051917],
    [0.00000002035, 3.84713937892, 524.09325996451],
    [0.00000002005, 2.40063053691, 843.145258497],
    [0.00000002366, 1.24399407734, 3708.0805731457],
    [0.00000001959, 0.76199223049, 163.1403367424],
    [0.00000002451, 2.98565323941, 739.5648493114],
    [0.00000002474, 0.7730085993, 2122.93983112501],
    [0.00000001935, 4.38042537965, 3164.1625140495],
    [0.00000002548, 0.72951803247, 1128.7782719475],
    [0.0000000214, 3.75230805584, 408.68276109481],
    [0.00000002089, 5.41923470052, 60.04756252381],
    [0.00000002555, 1.04261904815, 231.8052260502],
    [0.00000002289, 2.53062848354, 429.28968891431],
    [0.00000002652, 4.81114494152, 405.0137323901],
    [0.00000002044, 4.84208091423, 241.3664536058],
    [0.00000001959, 2.21322194743, 3480.06674873909],
    [0.0000000189, 6.01613452327, 501.4805945749],
    [0.00000002361, 1.03417291975, 1819.8812835927],
    [0.0000000229, 3.64742542679, 386.9974974773],
    [0.00000001839, 3.04284528593, 511.2879003464],
    [0.00000001873, 0.59051569111, 1209.18894480731],
    [0.00000001837, 4.84296500864, 111.4133465494],
    [0.0000000251, 1.9946128273, 602.00806815971],
    [0.00000002186, 3.48581623798, 1553.8919901152],
    [0.00000001875, 3.39330212644, 1590.2799206138],
    [0.00000002325, 1.42158890974, 488.8809856335],
    [0.0000000196, 1.10678196058, 109.48693085641],
    [0.00000002511, 6.05202626734, 167.07249000551],
    [0.00000002012, 0.85932602524, 3583.1595229577],
    [0.00000002198, 4.38757351366, 297.9888049084],
    [0.00000002129, 5.01247506157, 821.94762984651],
    [0.00000002219, 4.67528803846, 2641.0974609887],
    [0.00000001954, 5.49745211708, 1415.3744932445],
    [0.00000001787, 3.66506787987, 1059.88638010361],
    [0.00000001933, 2.03855165852, 1688.4773337228],
    [0.00000002173, 5.25212332069, 1065.776086827],
    [0.00000002273, 2.84142693944, 1589.26852865751],
    [0.00000002311, 4.82462753962, 36.892380413],
    [0.00000002005, 1.05923309333, 746.67839631219],
    [0.00000001716, 2.65554696835, 504.0712874816],
    [0.0000000197, 2.68003788885, 363.1061100561],
    [0.00000001879, 6.24564932571, 1994.5742626409],
    [0.00000001715, 5.11493591992, 2950.8634186115],
    [0.00000001859, 0.05233968738, 2221.6128171135],
    [0.0000000176, 4.24064604671, 1051.5489928254],
    [0.00000001679, 2.30938727968, 2310.4784973305],
    [0.00000002127, 4.22476224615, 945.22664075931],
    [0.00000001827, 1.41025945774, 110.49832281271],
    [0.00000001954, 4.77927442918, 1446.8670626335],
    [0.00000002077, 1.69841550605, 724.5869957844],
    [0.00000002096, 6.06068383411, 570.98857952271],
    [0.00000001615, 5.64607488965, 1052.5603847817],
    [0.00000001608, 4.82673133397, 555.7982776746],
    [0.00000001681, 3.99691992442, 516.4414017594],
    [0.00000001681, 3.48535837754, 543.4281633968],
    [0.00000001618, 3.60392485527, 112.4101842907],
    [0.00000001962, 4.1831400635, 836.7654246791],
    [0.00000001962, 4.1831400635, 836.2777897121],
    [0.0000000162, 2.4752221452, 683.4301329758],
    [0.00000001551, 0.77201297425, 593.67068088151],
    [0.00000001819, 4.45299196922, 3060.5821048639],
    [0.00000001634, 6.04073888889, 56.3785338191],
    [0.00000001791, 4.81648790148, 502.8474472042],
    [0.00000002008, 0.95169324404, 487.3965129252],
    [0.00000001551, 1.50150617084, 3686.2522971763],
    [0.00000001511, 0.18786787527, 1518.46726746311],
    [0.0000000191, 3.25977004432, 228.83628063359],
    [0.00000001738, 5.42191577135, 1226.45442019471],
    [0.00000001471, 4.48878361688, 350.5759370839],
    [0.00000001466, 3.39788090489, 426.7938242497],
    [0.00000001636, 4.00371950748, 2200.2721761111],
    [0.0000000194, 1.85697551551, 1432.6399686319],
    [0.00000001484, 2.41547562672, 995.88984936931],
    [0.00000001673, 2.66579038613, 557.02211795201],
    [0.00000002009, 2.30992514879, 417.2807808039],
    [0.00000001573, 6.26224126504, 425.878800513],
    [0.00000001562, 5.88372601556, 416.547067621],
    [0.00000001419, 4.93673377317, 216.72430665921],
    [0.00000001787, 4.51629855363, 1059.3651152418],
    [0.000000016, 1.96218529204, 1268.9926898476],
    [0.00000001459, 0.29602595476, 426.8901924693],
    [0.0000000186, 5.30365267047, 1160.27084133651],
    [0.00000001409, 5.78259738624, 383.81610373959],
    [0.00000001599, 5.70543219748, 1588.3535049208],
    [0.00000001385, 0.39231250148, 466.1988842747],
    [0.00000001645, 4.96839986582, 630.5798762419],
    [0.00000001867, 4.87609131592, 1744.6120500584],
    [0.00000001796, 0.70669960542, 424.39432780471],
    [0.00000001802, 0.24900630046, 572.473052231],
    [0.00000001563, 1.20698143227, 312.21589891],
    [0.00000001811, 5.89884616616, 1340.5928946772],
    [0.00000001342, 4.0981465319, 849.7711705308],
    [0.00000001409, 2.76107795785, 3472.9532017383],
    [0.0000000134, 4.11708835504, 1058.3537232855],
    [0.00000001342, 3.46763239406, 3377.4616094875],
    [0.00000001764, 5.75117118327, 312.9666584354],
    [0.00000001801, 0.07014275858, 833.7964792625],
    [0.00000001801, 3.21173541218, 833.30884429549],
    [0.00000001504, 2.41769920056, 1052.46401656211],
    [0.00000001346, 5.55344965198, 1066.7874787833],
    [0.00000001711, 0.54051201789, 1363.48744435711],
    [0.00000001382, 5.00462801017, 24.1352049047],
    [0.00000001636, 4.96830039642, 422.64922266551],
    [0.00000001714, 1.09473818717, 1165.16620244611],
    [0.00000001547, 5.14492139001, 1097.7587833105],
    [0.00000001706, 5.12109897845, 1696.341640249],
    [0.00000001293, 1.41573154819, 394.5986794451],
    [0.00000001361, 5.15743428812, 1579.0217720288],
    [0.00000001329, 0.80850930613, 1628.6735886825],
    [0.00000001657, 1.38618195393, 473.31243127551],
    [0.00000001342, 2.46878559927, 827.67977000299],
    [0.00000001353, 2.5930594484, 2499.1354458219],
    [0.00000001322, 3.36892891689, 1464.8832975463],
    [0.00000001528, 5.01222546113, 138.76131435421],
    [0.00000001507, 5.88638092049, 774.98957196349],
    [0.00000001375, 2.40966547086, 1093.5659976165],
    [0.00000001393, 5.43252740056, 913.9947038012],
    [0.00000001302, 6.01486777282, 494.7225082471],
    [0.00000001266, 4.7672311251, 1162.7667060011],
    [0.00000001602, 5.54171392759, 611.1992808273],
    [0.00000001243, 0.73887599211, 561.6904765255],
    [0.00000001234, 0.32614546594, 436.4032359151],
    [0.00000001258, 1.58417788394, 1162.67033778151],
    [0.0000000149, 2.87282781805, 1468.06469128401],
    [0.00000001419, 1.54071741199, 1138.3394995031],
    [0.00000001394, 5.15652264283, 958.9806540089],
    [0.0000000129, 3.5864255611, 990.47322339791],
    [0.00000001199, 5.33903838516, 414.31183538731],
    [0.00000001364, 2.24443885688, 252.8997888367],
    [0.00000001494, 3.0874156016, 1485.7363035817],
    [0.00000001367, 3.04146468402, 527.9626749028],
    [0.00000001464, 2.33832116265, 1066.69111056371],
    [0.00000001248, 4.58111803711, 9.3174100721],
    [0.00000001194, 4.20928976432, 774.25336665311],
    [0.00000001328, 3.90212909678, 482.9767246951],
    [0.00000001176, 4.08169238786, 633.07574090651],
    [0.00000001352, 4.83033510793, 696.7634551001],
    [0.00000001235, 6.00673735479, 1027.3824187583],
    [0.00000001192, 1.4674104757, 565.1470569091],
    [0.00000001337, 3.6125173876, 427.805216206],
    [0.00000001581, 5.13731640491, 642.58878435231],
    [0.00000001186, 3.09982091978, 2115.0755245988],
    [0.00000001339, 4.45992661727, 1161.7553140448],
    [0.0000000126, 1.21412389098, 633.9907646432],
    [0.00000001309, 1.91003196451, 1163.6817297378],
    [0.00000001221, 6.0735905328, 2538.00468677009],
    [0.00000001133, 5.69121919762, 738.814089786],
    [0.00000001172, 0.90157251525, 632.9793726869],
    [0.0000000112, 3.02627322689, 709.29362807231],
    [0.0000000134, 4.06427807846, 1060.8977720599],
    [0.00000001126, 2.69535643306, 2729.96314120569],
    [0.00000001417, 2.51678541283, 1364.4842820984],
    [0.00000001112, 3.72336688315, 1066.2180298117],
    [0.00000001312, 6.06573442442, 981.8752036888],
    [0.00000001496, 4.33280725286, 388.70897272171],
    [0.00000001423, 6.09024848918, 586.5571338807],
    [0.00000001221, 5.21060853641, 269.6776292571],
    [0.00000001088, 6.00908281655, 1280.0383901115],
    [0.00000001089, 3.60595774779, 946.97174589851],
    [0.00000001132, 5.22322415543, 1664.09831133461],
    [0.00000001433, 0.48122466534, 635.4752373515],
    [0.00000001427, 4.54173500327, 597.11519917759],
    [0.00000001389, 5.65859882018, 636.47207509279],
    [0.00000001191, 3.52581460046, 1887.5493351592],
    [0.0000000142, 4.97687573513, 1140.1394863965],
    [0.0000000142, 4.97687573513, 1140.6271213635],
    [0.00000001082, 5.2331427792, 915.4791765095],
    [0.00000001134, 1.71654085995, 102.3276918733],
    [0.00000001061, 0.33709671438, 925.0404040651],
    [0.00000001302, 2.50290977947, 637.2203424907],
    [0.00000001036, 0.534774312, 1798.68365494221],
    [0.0000000121, 0.08512627078, 31.73638687251],
    [0.0000000121, 3.22671892437, 31.24875190549],
    [0.00000001439, 4.57403818109, 244.0747665915],
    [0.0000000102, 3.62336804453, 732.45130231059],
    [0.00000001025, 5.53135631392, 951.86710700811],
    [0.00000001018, 0.87096787225, 623.4663292411],
    [0.00000001027, 5.32423350857, 1474.9176058539],
    [0.00000001114, 2.21692840772, 103.37022159689],
    [0.0000000104, 0.8374501757, 314.1880065853],
    [0.00000001371, 2.7077779664, 4590.6663630055],
    [0.00000001256, 4.91935004376, 73.0533083755],
    [0.00000001059, 4.12678319156, 3590.7607049255],
    [0.00000001008, 4.10762131673, 1140.8902459219],
    [0.00000001288, 3.82410217609, 2004.60857094851],
    [0.00000001033, 1.08663300387, 1028.6062590357],
    [0.00000001085, 2.21886409341, 395.34943897051],
    [0.00000000971, 6.06185705215, 665.27088571111],
    [0.00000001358, 3.05188631331, 448.9334088873],
    [0.0000000098, 1.98914636396, 961.94959942551],
    [0.00000000994, 1.9711949128, 3796.4586183957],
    [0.00000001202, 3.96954337111, 453.66871130251],
    [0.00000001028, 5.20130168371, 2524.2652277355],
    [0.0000000104, 0.76651765316, 170.51700830159],
    [0.00000000955, 2.14163148842, 645.5577297689],
    [0.00000001241, 5.96190045692, 1048.0924124418],
    [0.00000001076, 4.54364112469, 2957.48933064529],
    [0.0000000123, 0.76262291362, 1354.6769763269],
    [0.0000000124, 4.37679167579, 610.93615626891],
    [0.0000000124, 1.2351990222, 610.44852130189],
    [0.00000001022, 5.26668499759, 276.79117625789],
    [0.00000000924, 3.9906307333, 842.65762352999],
    [0.00000001083, 0.34974746355, 1901.7764291608],
    [0.00000001243, 3.14900420596, 671.1605924345],
    [0.00000001013, 4.11841355585, 3376.9739745205],
    [0.000000011, 4.35722465068, 1053.0334655337],
    [0.00000001099, 1.23775171296, 611.8299281462],
    [0.00000001099, 3.10291088519, 448.03963701001],
    [0.00000001033, 3.86976091725, 632.06434895021],
    [0.00000000957, 2.32518989533, 2965.09051261311],
    [0.0000000103, 1.77683782212, 1141.3778808889],
    [0.00000001196, 4.13327524621, 8520.87605922509],
    [0.00000000967, 4.90659485068, 829.0611768473],
    [0.00000001166, 0.1098788352, 1511.5661687834],
    [0.00000001147, 4.05159175951, 1390.2447113309],
    [0.00000000873, 0.21746359309, 322.26476143261],
    [0.00000001137, 5.96453800922, 950.90389916161],
    [0.00000001201, 4.10007739292, 1436.2969352491],
    [0.00000000903, 4.75936593867, 1475.9289978102],
    [0.00000000858, 4.08152704252, 3480.5543837061],
    [0.00000001061, 3.86340607753, 1014.3791650341],
    [0.00000000852, 2.28740434163, 1305.16817202511],
    [0.00000001121, 2.22650360725, 2861.9977383945],
    [0.00000000978, 0.01048414798, 1262.6299023722],
    [0.00000000918, 2.29661901563, 341.01470952831],
    [0.00000000886, 0.44036055466, 1482.2917852856],
    [0.00000001153, 2.60386985545, 1055.95671896799],
    [0.00000001011, 0.56246587032, 1379.9497705924],
    [0.00000000844, 3.23872317111, 231.70216018621],
    [0.00000000939, 3.33692331113, 1703.4551872498],
    [0.00000001029, 1.16181986038, 2545.6058687379],
    [0.00000001042, 5.64923274668, 297.8857390444],
    [0.0000000117, 2.68197224847, 46.22660543249],
    [0.00000000962, 5.05559487343, 37.88921815429],
    [0.00000000877, 1.00643184196, 357.68948408471],
    [0.00000000988, 2.20288476603, 7211.1596359777],
    [0.00000000892, 3.84433244725, 1571.1574655026],
    [0.00000001109, 5.81958333017, 348.1282565291],
    [0.00000000827, 5.97485149381, 20956.5058750001],
    [0.00000000934, 5.21360076093, 525.514994348],
    [0.00000000914, 0.28108854924, 1031.3145720214],
    [0.00000000998, 2.30051279264, 1505.9370944909],
    [0.00000001003, 3.78100971695, 1681.36378672201],
    [0.00000001043, 5.91678666313, 3384.5751564883],
    [0.00000001133, 5.7489434034, 1357.8583700646],
    [0.00000001118, 1.45393796917, 892.7970751507],
    [0.00000000818, 1.62737897182, 1153.1572943357],
    [0.00000000883, 3.37767668051, 533.45790092711],
    [0.00000000883, 4.10460162145, 526.4116642291],
    [0.00000000966, 5.59349076815, 381.8560581518],
    [0.00000001014, 5.77098535837, 50.6463936626],
    [0.00000001014, 2.62939270478, 50.15875869559],
    [0.00000000977, 4.64792461073, 25035.39094090229],
    [0.00000000933, 5.47050254707, 671.8967977449],
    [0.00000000898, 3.74591414099, 2516.66404576769],
    [0.00000000787, 2.68667239235, 1056.917434687],
    [0.00000000788, 1.39640318925, 4002.64416683289],
    [0.0000000095, 4.11439083259, 532.6285413488],
    [0.00000000839, 5.03983812044, 4686.6455902233],
    [0.00000000965, 5.19147359292, 1520.1641884925],
    [0.00000001017, 1.65929197414, 1020.0082393266],
    [0.0000000082, 1.90274013249, 348.3913810875],
    [0.00000000786, 1.79549510698, 178.11819026941],
    [0.00000000929, 0.76030088993, 1130.47519297691],
    [0.00000000779, 1.3473397773, 224.1009782184],
    [0.00000000951, 1.75056688455, 25021.16384690069],
    [0.00000000917, 0.46397488831, 3899.5513926143],
    [0.00000000763, 4.49833164066, 432.2586343309],
    [0.00000000841, 1.57808557219, 643.32249753521],
    [0.00000000782, 0.66767670749, 1731.76636290111],
    [0.00000000945, 0.70467760679, 758.5272457282],
    [0.00000001032, 3.19953750862, 3075.2968338325],
    [0.00000000899, 5.79764466292, 1053.4059725492],
    [0.00000000822, 5.20921850714, 1354.18934135989],
    [0.00000000742, 0.432699376, 896.7292284138],
    [0.00000000989, 5.20317411602, 493.2862196486],
    [0.00000000989, 2.27910418594, 566.58334550761],
    [0.00000000742, 2.64620540713, 948.4562186068],
    [0.00000000743, 4.86638449602, 3267.2552882681],
    [0.00000000785, 0.04530717907, 5091.90814063229],
    [0.00000000735, 5.88444842565, 1689.2280932482],
    [0.00000000902, 5.02430551931, 3487.66793070691],
    [0.00000000766, 3.02399738953, 402.4629859713],
    [0.0000000087, 3.62030616326, 522.2999707155],
    [0.0000000087, 0.72037948511, 537.5695944407],
    [0.00000000789, 0.10009487038, 950.3826342998],
    [0.00000000729, 4.89347516312, 2226.0326053436],
    [0.00000000967, 3.04856021602, 149.3193796511],
    [0.0000000074, 0.59195492427, 172.0014810099],
    [0.00000000732, 3.8586826002, 1600.3624130312],
    [0.00000000743, 2.09672296294, 6011.6893409589],
    [0.00000000773, 0.18183783219, 8616.85528644289],
    [0.00000000718, 5.42139839209, 1055.2059594426],
    [0.00000000814, 2.46839638562, 5.385256809],
    [0.0000000078, 6.07431076573, 949.3712423435],
    [0.00000000736, 4.07506898321, 23968.89546371229],
    [0.00000000703, 4.4826183795, 2108.7127371234],
    [0.00000000705, 2.70029551415, 260.01333583751],
    [0.00000000837, 1.52005452422, 97.4323307637],
    [0.00000000708, 3.40550883575, 628.6077685666],
    [0.000000007, 1.73883435675, 78.2068097885],
    [0.00000000704, 5.21043618727, 621.4942215658],
    [0.00000000972, 5.51177820347, 806.96977631951],
    [0.00000000902, 1.24655233839, 3259.39098174191],
    [0.00000000806, 0.63642725064, 703.8770021009],
    [0.00000000861, 4.84084957436, 215.99059347631],
    [0.00000000761, 5.97371837033, 2310.9661322975],
    [0.00000000705, 4.55292890701, 657.4065791849],
    [0.00000000758, 2.16941238331, 1382.64352936309],
    [0.00000000727, 0.27903898087, 64.7159210973],
    [0.00000000687, 4.51235449745, 952.8639447494],
    [0.00000000692, 4.02871358383, 10.051123255],
    [0.00000000963, 2.76790770152, 6916.1034067881],
    [0.00000000906, 4.48544256463, 110.4019545931],
    [0.00000000729, 2.53279790409, 3789.34507139489],
    [0.00000000678, 4.97651378738, 2218.91905834281],
    [0.0000000081, 1.91237826709, 678.0135070044],
    [0.00000000761, 5.70182901948, 1542.8462898513],
    [0.00000000734, 6.16258391033, 4863.4417305527],
    [0.00000000793, 0.81892149809, 209.6107596584],
    [0.00000000666, 1.94007934478, 4127.5652170209],
    [0.00000000849, 2.44682670396, 368.83825021259],
    [0.00000000815, 0.85093813087, 359.173956793],
    [0.00000000865, 4.95824919504, 157.0236274829],
    [0.00000000799, 4.90559666559, 519.15220687259],
    [0.0000000073, 0.97760856285, 98.6561710411],
    [0.00000000923, 4.75879664446, 179.6026629777],
    [0.00000000862, 2.42176207749, 1669.83045149109],
    [0.00000000903, 4.81493761835, 1745.0996850254],
    [0.00000000704, 5.19561938169, 718.8548556279],
    [0.00000000765, 0.82148767779, 1834.8591371197],
    [0.00000000651, 2.1302253811, 153.25153291419],
    [0.0000000067, 3.96692910866, 5702.4110183031],
    [0.00000000689, 5.62284795095, 540.49284787499],
    [0.00000000677, 0.37927842067, 745.6815585709],
    [0.00000000646, 1.69538207689, 2118.5200428949],
    [0.00000000744, 6.04329221154, 305.85311143459],
    [0.00000000837, 1.9436390636, 1818.3968108844],
    [0.00000000795, 3.06915549224, 376.9150050599],
    [0.00000000639, 5.1599930649, 5282.92637442791],
    [0.00000000639, 4.79373670634, 651.1868040614],
    [0.00000000791, 3.64973766479, 2432.21815378081],
    [0.00000000666, 1.47748551243, 2439.3317007816],
    [0.00000000699, 2.04088853152, 999.8220026324],
    [0.00000000848, 3.15425868901, 445.00125562421],
    [0.00000000784, 2.44486888742, 1372.3485886246],
    [0.00000000784, 5.48434762861, 494.022424959],
    [0.00000000826, 0.95388118622, 1063.0702659688],
    [0.00000000773, 0.18999764486, 3334.1725803092],
    [0.00000000766, 5.19735998756, 927.5911504839],
    [0.00000000629, 3.97966005206, 444.1074837469],
    [0.0000000068, 5.78589517711, 2854.3965564267],
    [0.00000000652, 2.84744627046, 99.92819542829],
    [0.00000000628, 3.17606592131, 3693.8534791441],
    [0.0000000081, 4.60918284532, 721.40560204669],
    [0.00000000854, 4.61209992426, 1366.4563897737],
    [0.00000000867, 4.1929486441, 10846.3131030077],
    [0.00000000788, 1.41713341612, 1040.97886544099],
    [0.00000000626, 5.7937927373, 841.9068640046],
    [0.0000000063, 0.46054027581, 291.76902978489],
    [0.0000000065, 1.16669181964, 558.3889705813],
    [0.00000000611, 1.65671418659, 4443.9570866775],
    [0.00000000726, 0.52368203745, 2151.25100677631],
    [0.00000000751, 1.10181429478, 446.06752933469],
    [0.00000000615, 0.87878140238, 208.3894115085],
    [0.00000000745, 1.0388488839, 451.97179027311],
    [0.00000000614, 2.12015186904, 6121.8956621783],
    [0.00000000603, 1.87255401888, 181.56270856549],
    [0.00000000616, 2.28876027875, 1144.0716396596],
    [0.00000000636, 2.38750125211, 1751.2957139325],
    [0.00000000596, 1.00492203164, 737.60480372361],
    [0.00000000619, 2.8007363622, 326.1969146957],
    [0.00000000787, 2.60401736226, 1802.12817323829],
    [0.00000000781, 2.22467267459, 88.35873817511],
    [0.00000000617, 2.17402643196, 921.108250802],
    [0.00000000591, 3.73213502799, 1166.1630401874],
    [0.0000000059, 1.05361074587, 3634.37720703489],
    [0.00000000722, 1.40579320968, 1791.5701079414],
    [0.0000000082, 2.67631464422, 1372.08546406621],
    [0.0000000059, 2.98691366177, 627.61093082531],
    [0.00000000611, 0.43380344797, 392.9017584157],
    [0.00000000611, 0.76528954681, 666.96780674051],
    [0.00000000584, 4.1403937703, 2737.5643231735],
    [0.00000000624, 0.20438602023, 702.1800810715],
    [0.000000006, 5.10974978259, 203.49405039889],
    [0.0000000072, 1.60831618587, 3333.7426971825],
    [0.00000000715, 4.50656990635, 3347.96979118411],
    [0.00000000604, 5.25311127639, 427.3632732213],
    [0.00000000578, 5.39623231304, 881.7513748868],
    [0.00000000752, 3.84564478305, 799.36859435169],
    [0.00000000581, 3.86115308052, 2954.0448123492],
    [0.00000000754, 2.66282639252, 1022.9771847432],
    [0.00000000772, 1.65864906434, 711.7413086271],
    [0.00000000577, 5.47810665105, 700.2079733962],
    [0.00000000736, 0.60214952186, 458.12212942741],
    [0.00000000736, 0.59694347292, 601.7474357288],
    [0.00000000693, 3.40638930298, 1967.96000801901],
    [0.0000000074, 3.80855554417, 416.79314583689],
    [0.00000000704, 1.18207892692, 425.35753565121],
    [0.00000000708, 3.0267595428, 3391.68870348911],
    [0.00000000607, 1.06404276153, 105.76971804189],
    [0.00000000559, 2.48504877569, 20426.8149099055],
    [0.00000000628, 4.57438103298, 1809.72935520611],
    [0.00000000696, 1.91024083106, 378.8871127352],
    [0.00000000554, 2.66964046417, 386.00065973601],
    [0.00000000589, 4.41883744785, 3273.8812003019],
    [0.00000000633, 0.34663077486, 131.16013238639],
    [0.00000000562, 4.54266444163, 4803.9654584435],
    [0.0000000056, 3.1396886919, 421.212934067],
    [0.0000000058, 5.96191438656, 5179.8336002093],
    [0.0000000074, 4.24815360369, 913.5070688342],
    [0.00000000699, 5.94463211291, 2627.3580019541],
    [0.00000000699, 2.80303945932, 2626.8703669871],
    [0.00000000747, 3.30207127034, 90.3187837629],
    [0.00000000575, 6.1201187637, 1656.9847643338],
    [0.00000000555, 0.8936184624, 6702.8043113501],
    [0.00000000559, 3.70914713824, 388.9696051526],
    [0.00000000672, 2.38005250851, 2417.24030025381],
    [0.00000000606, 3.82620569675, 3693.36584417709],
    [0.00000000538, 2.49928826237, 7564.58690325449],
    [0.00000000539, 4.29776010398, 828.16740497],
    [0.00000000548, 2.14286023475, 4700.87268422489],
    [0.00000000599, 3.48576134992, 108.47803102759],
    [0.0000000055, 2.51535265264, 3046.3550108623],
    [0.00000000652, 5.0125033901, 282.20780222929],
    [0.00000000586, 0.16653899616, 878.08234618209],
    [0.00000000622, 3.01686451694, 568.80402352629],
    [0.00000000728, 5.63080764277, 344.45922782439],
    [0.00000000544, 2.3176996519, 10633.0140075697],
    [0.00000000657, 0.62701478688, 464.97504399731],
    [0.00000000546, 1.66601868578, 4112.8504880523],
    [0.00000000541, 4.47410178003, 121.0082039998],
    [0.00000000695, 5.90409812875, 421.6885069465],
    [0.00000000601, 4.73252889479, 426.3207434977],
    [0.00000000525, 4.24523707483, 76674.39271195528],
    [0.00000000532, 5.96635649363, 8734.17515466309],
    [0.00000000622, 5.60046914442, 1091.3814416201],
    [0.00000000553, 0.95137962286, 604.2287461784],
    [0.00000000633, 5.27242003059, 2274.303015153],
    [0.00000000564, 0.16497975863, 241.8540885728],
    [0.00000000516, 4.97603038853, 5599.3182440845],
    [0.00000000645, 6.01896827268, 10110.4365894759],
    [0.00000000509, 3.68808359097, 1159.0494931866],
    [0.00000000507, 3.50264799357, 615.7620814093],
    [0.00000000599, 2.57801707543, 185.2317372702],
    [0.00000000522, 5.63448152934, 1884.36794142151],
    [0.0000000052, 3.87463188031, 1457.2821155785],
    [0.00000000527, 1.69611452147, 1512.56300652469],
    [0.00000000503, 4.96282947219, 1037.7974717033],
    [0.00000000517, 3.70527239794, 6018.8028879597],
    [0.00000000613, 0.15991201142, 607.8977748831],
    [0.00000000601, 0.38470330699, 700.6956083632],
    [0.00000000505, 1.61427941704, 5908.5965667403],
    [0.00000000679, 0.99986935446, 1357.3707350976],
    [0.00000000496, 3.33323961426, 1048.8431719672],
    [0.00000000602, 5.52925928036, 680.98245242101],
    [0.00000000621, 4.68680597499, 1560.3748897971],
    [0.00000000623, 1.32300241317, 120.01136625851],
    [0.00000000494, 5.73456422193, 523.5719951027],
    [0.00000000494, 4.88930673362, 536.29757005351],
    [0.000000005, 4.78996332607, 2840.6570973921],
    [0.00000000657, 0.40007659336, 2351.0567213956],
    [0.00000000587, 0.46191357824, 215.50295850929],
    [0.00000000609, 4.14432847094, 614.868309532],
    [0.00000000609, 4.14432847094, 614.38067456499],
    [0.00000000502, 0.25251420069, 1379.4621356254],
    [0.00000000492, 3.31162640299, 419.28901050149],
    [0.00000000485, 1.66419456691, 1937.9519113383],
    [0.00000000484, 0.12315312076, 102.0981972097],
    [0.00000000491, 0.11387232043, 419.1926422819],
    [0.00000000636, 5.51773112302, 664.5201261857],
    [0.00000000478, 4.25859285582, 204.97852310719],
    [0.00000000494, 2.92886717648, 2758.9049641759],
    [0.00000000495, 1.58073941957, 398.5308327082],
    [0.00000000483, 0.96081432259, 89.10949770051],
    [0.00000000589, 0.26853478837, 2740.7457169112],
    [0.000000006, 0.00177768827, 634.512029505],
    [0.00000000486, 3.47387686711, 2203.94120481581],
    [0.00000000515, 4.5658398488, 1091.1183170617],
    [0.00000000615, 5.82613512558, 3700.96702614491],
    [0.0000000049, 3.48488181967, 8631.0823804445],
    [0.00000000494, 6.23491155272, 984.35651413839],
    [0.00000000475, 3.8485738804, 103.59971626049],
    [0.00000000475, 4.1610312913, 835.5440765292],
    [0.00000000512, 0.43877261458, 397.9001853893],
    [0.00000000655, 3.37451455932, 127.22797912329],
    [0.00000000468, 5.66081615363, 582.62498061761],
    [0.00000000468, 1.82146214833, 477.2445845386],
    [0.00000000543, 1.20297336764, 481.1767378017],
    [0.00000000543, 6.27930493431, 578.69282735451],
    [0.00000000517, 2.43390627861, 76.0222537921],
    [0.00000000573, 6.09163052699, 1132.9228735317],
    [0.00000000649, 5.08795164761, 3184.6093831746],
    [0.0000000048, 2.95348186297, 2133.2347718635],
    [0.00000000468, 0.49074178268, 2048.1582325577],
    [0.00000000594, 1.96853371116, 390.9296507404],
    [0.00000000459, 3.1924477166, 937.8860912224],
    [0.00000000481, 0.5687847128, 1443.6856688958],
    [0.00000000463, 4.21398380834, 429.7627696663],
    [0.00000000545, 4.8732876512, 3157.04896704871],
    [0.00000000475, 3.93834590521, 3907.1525745821],
    [0.00000000609, 3.24848207205, 1595.5364878908],
    [0.00000000473, 4.6959962794, 733.67265046051],
    [0.00000000541, 5.85990514227, 52176.0501006319],
    [0.00000000533, 1.2715148134, 382.85289589309],
    [0.00000000534, 2.70958907609, 843.8789716799],
    [0.00000000451, 3.99705226028, 5371.30441967789],
    [0.00000000471, 2.88657776376, 2572.4325716809],
    [0.00000000558, 0.5720782557, 594.8945211589],
    [0.00000000588, 0.10678640907, 458.33457774851],
    [0.00000000482, 2.66167846082, 6114.7821151775],
    [0.00000000449, 6.27428540227, 1221.6047488379],
    [0.00000000447, 3.6475671452, 584.26951202031],
    [0.00000000447, 3.83471115676, 475.6000531359],
    [0.00000000466, 2.22916713968, 632.50629193491],
    [0.00000000624, 1.32472646328, 10529.9212333511],
    [0.00000000605, 3.46941164072, 300.854684461],
    [0.00000000487, 0.70356343888, 321.3015535861],
    [0.00000000487, 1.71799868416, 206.9049388002],
    [0.00000000526, 0.02936914645, 1336.6607414141],
    [0.0000000045, 2.88322597733, 518.62844988331],
    [0.0000000045, 1.45745967104, 541.2411152729],
    [0.00000000452, 4.02637396486, 252.4121538697],
    [0.00000000569, 1.35475382052, 207.426203662],
    [0.00000000442, 2.28319191504, 10976.83498721549],
    [0.00000000435, 3.6153694826, 218.4719039259],
    [0.00000000536, 5.87308650386, 1781.2751672029],
    [0.00000000606, 6.18675939821, 6599.7115371315],
    [0.0000000043, 4.70071691496, 2535.3109279994],
    [0.00000000465, 2.19694664935, 1084.0047700609],
    [0.00000000528, 4.80779932075, 557.75832326239],
    [0.00000000602, 0.32017022594, 354.76872277791],
    [0.00000000602, 0.87892276884, 705.1008423783],
    [0.00000000579, 0.48304329741, 462.05428269051],
    [0.00000000579, 0.71604969737, 597.8152824657],
    [0.0000000048, 3.58335127463, 1106.0961705887],
    [0.00000000561, 5.19314855697, 1859.2381595079],
    [0.00000000565, 4.77820464913, 531.8948281659],
    [0.00000000593, 2.30529340153, 1291.6747912064],
    [0.00000000593, 5.44688605512, 1291.1871562394],
    [0.00000000467, 3.40834000086, 2833.0559154243],
    [0.00000000423, 4.74881408933, 799.8562293187],
    [0.00000000591, 4.03092476406, 1819.3936486257],
    [0.00000000442, 5.80146904507, 1069.18697522831],
    [0.00000000538, 2.60007571681, 1065.35788782919],
    [0.00000000472, 3.85236778376, 460.2946233363],
    [0.00000000432, 4.43898680981, 2080.8746422241],
    [0.00000000415, 1.39162146625, 4760.34895633411],
    [0.00000000455, 1.46286831547, 2527.4466214732],
    [0.00000000506, 1.9332678777, 535.6669227346],
    [0.00000000408, 4.65095351213, 237.4343003427],
    [0.00000000558, 5.74240390212, 2348.087775979],
    [0.00000000506, 3.68273316284, 2424.3538472546],
    [0.00000000496, 4.48964897087, 4120.4516700201],
    [0.00000000496, 4.48964897088, 4119.96403505309],
    [0.00000000432, 6.00820922222, 1301.236018762],
    [0.0000000055, 0.72236210742, 8837.26792888169],
    [0.00000000546, 1.74052459203, 761.98382611181],
    [0.00000000546, 1.74052459203, 761.49619114479],
    [0.00000000435, 1.40434697094, 205.8935468439],
    [0.00000000463, 2.74974947852, 633.5488216585],
    [0.00000000408, 3.36326895916, 1482.55490984399],
    [0.00000000483, 5.05507740192, 2879.2632137819],
    [0.00000000511, 5.17393230173, 1670.5812110165],
    [0.00000000421, 4.17496125106, 638.65663108921],
    [0.00000000512, 6.20542375764, 1474.4299708869],
    [0.00000000388, 4.23664234872, 2425.10460678],
    [0.00000000483, 0.89849999521, 154.0546820663],
    [0.00000000412, 2.38738008672, 83.6234357599],
    [0.00000000384, 4.812637851, 673.8689054202],
    [0.000000004, 1.20395052136, 2755.7235704382],
    [0.000000005, 5.48455845139, 1973.37663399041],
    [0.0000000038, 4.43228458999, 3583.64715792471],
    [0.00000000509, 1.520551779, 5856.23384163189],
    [0.00000000392, 1.84630187584, 6328.0812106155],
    [0.00000000391, 3.77313110506, 670.89996000361],
    [0.00000000397, 1.19492848989, 50586.48957038109],
    [0.00000000468, 4.28211685631, 1970.9289534356],
    [0.00000000491, 4.48946441703, 1288.7058457898],
    [0.00000000491, 4.48946441703, 1288.21821082279],
    [0.00000000472, 0.93312891407, 416.532513406],
    [0.00000000491, 1.09230657741, 601.5349874077],
    [0.00000000476, 1.86175772015, 2015.42726867629],
];

const Y1: &[Term] = &[
    [0.0191255649, 2.66195491149, 0.2438174835],
    [0.00634902259, 4.81945405671, 1059.6257476727],
    [0.00600483021, 0.85860311815, 522.8212355773],
    [0.00589005176, 0.34484971445, 537.0483295789],
    [0.00081432741, 1.9025163378, 7.3573644843],
    [0.00046191617, 5.16976189642, 1589.3167127673],
    [0.00037242394, 1.81456616256, 529.9347825781],
    [0.00032508552, 0.17601327437, 1052.51220067191],
    [0.00031231184, 0.77622354337, 1066.7392946735],
    [0.0002595074, 0.81541881282, 529.44714761109],
    [0.00020232242, 2.89760937255, 110.45013870291],
    [0.0001794164, 2.45019898255, 426.8420083595],
    [0.00013643757, 5.01666809262, 633.0275567967],
    [0.00012962263, 0.99688324083, 515.70768857651],
    [0.00009123979, 0.21013091394, 544.1618765797],
    [0.00008098978, 4.5858244461, 949.4194264533],
    [0.00007143102, 1.6028787439, 323.74923414091],
    [0.00004115125, 6.25575758842, 205.9417309537],
    [0.00004370464, 5.85779443169, 736.1203310153],
    [0.00003400571, 1.33020584264, 526.7533888404],
    [0.00003332481, 6.14941384034, 533.1161763158],
    [0.00003869655, 1.7672421008, 14.47091148511],
    [0.00003043986, 0.0833663474, 526.00262931501],
    [0.00003013156, 1.02614271964, 419.72846135871],
    [0.00003001886, 1.1128229412, 533.8669358412],
    [0.00002892493, 3.33842613324, 103.3365917021],
    [0.00002393125, 2.051437796, 316.6356871401],
    [0.00002989944, 5.51952313334, 2119.00767786191],
    [0.00002354966, 4.86075556884, 109.9625037359],
    [0.00001853775, 1.19886684605, 1596.43025976811],
    [0.00001972856, 3.51875485226, 956.53297345411],
    [0.00001820762, 5.38126290712, 743.23387801611],
    [0.00001810752, 5.40985497363, 95.7354097343],
    [0.00001531701, 2.74785652806, 117.5636857037],
    [0.00001894874, 0.29375694918, 1582.2031657665],
    [0.00001527752, 6.20401691579, 640.1411037975],
    [0.00001634391, 6.11004516268, 1045.3986536711],
    [0.00001088512, 6.22920436039, 625.9140097959],
    [0.00001025988, 1.0020248587, 433.9555553603],
    [0.00001045564, 0.9599583915, 1265.81129610991],
    [0.00000977087, 0.62771509387, 220.6564599223],
    [0.00000984636, 6.14139798618, 1169.83206889211],
    [0.0000080513, 4.73126707725, 942.3058794525],
    [0.00000821829, 0.95222022801, 309.0345051723],
    [0.00000798891, 0.28589806015, 1155.6049748905],
    [0.00000834956, 0.44929628324, 522.3336006103],
    [0.00000600935, 3.92607423432, 6.86972951729],
    [0.0000075213, 4.84106440602, 1162.7185218913],
    [0.00000539923, 2.67204015773, 853.4401992355],
    [0.00000599196, 5.78978587742, 213.0552779545],
    [0.00000497018, 0.10277515742, 198.82818395289],
    [0.0000047693, 4.32981816387, 1692.40948698591],
    [0.00000499703, 1.45009748987, 330.8627811417],
    [0.00000383795, 0.60109464211, 1073.85284167431],
    [0.00000504945, 1.16897764893, 1059.1381127057],
    [0.00000402231, 4.64005130261, 1479.11039154791],
    [0.00000373538, 6.00201753992, 729.0067840145],
    [0.00000349467, 4.6789233407, 426.3543733925],
    [0.00000316847, 0.54679906466, 839.2131052339],
    [0.00000324562, 4.14050846767, 206.42936592071],
    [0.00000246849, 5.6768203168, 838.72547026689],
    [0.00000255191, 5.1968677517, 412.12727939089],
    [0.00000230121, 1.15174981889, 508.5941415757],
    [0.00000246851, 0.1793164732, 1272.9248431107],
    [0.0000022227, 1.13623310093, 412.6149143579],
    [0.00000213383, 1.33041208002, 1376.0176173293],
    [0.00000225567, 0.71754067098, 625.42637482889],
    [0.00000212049, 1.46978417946, 3.42521122121],
    [0.00000181234, 2.07915113995, 1368.9040703285],
    [0.00000174181, 0.2820207412, 1062.80714141041],
    [0.00000189391, 5.86988015498, 2648.6986429565],
    [0.00000161119, 1.45320059873, 519.63984183961],
    [0.00000157874, 3.21673827019, 536.5606946119],
    [0.0000014542, 1.14766744266, 1258.6977491091],
    [0.00000144205, 0.51347253517, 1055.6935944096],
    [0.00000143507, 2.13497084119, 309.5221401393],
    [0.00000126188, 1.74614874146, 1063.55790093581],
    [0.00000124788, 0.04973007408, 551.27542358051],
    [0.00000125329, 6.02678896114, 540.2297233166],
    [0.00000146669, 1.15255926772, 1056.444353935],
    [0.00000115893, 1.6108304489, 2126.1212248627],
    [0.00000124485, 1.74552486835, 3.6883357796],
    [0.00000118218, 0.09316615671, 515.2200536095],
    [0.00000114208, 0.48741044761, 227.77000692311],
    [0.00000113852, 4.27325397298, 742.74624304909],
    [0.00000144447, 4.51237423492, 1486.2239385487],
    [0.00000124849, 0.0614629638, 1575.08961876571],
    [0.00000093951, 5.4206489805, 1155.1173399235],
    [0.00000100599, 0.45008887739, 2111.8941308611],
    [0.00000103583, 0.35190071477, 419.2408263917],
    [0.00000092556, 0.28828088487, 1699.5230339867],
    [0.00000099479, 1.07544165521, 301.9209581715],
    [0.00000082832, 6.00125174633, 441.06910236111],
    [0.00000086688, 0.38035962497, 941.8182444855],
    [0.00000095969, 3.69584152771, 102.84895673509],
    [0.00000080324, 5.59950981116, 1471.9968445471],
    [0.00000102333, 1.61778028756, 21.5844584859],
    [0.00000078195, 3.52242385121, 525.26891613211],
    [0.00000074123, 0.00610250389, 647.25465079831],
    [0.0000007927, 4.84421399324, 728.5191490475],
    [0.00000074807, 3.95788072941, 534.6006490241],
    [0.00000087759, 5.73493623659, 632.5399218297],
    [0.000000698, 1.23323877527, 618.8004627951],
    [0.00000060886, 2.49979217695, 846.3266522347],
    [0.00000058777, 0.68694828546, 832.0995582331],
    [0.00000061003, 4.67098980984, 2222.1004520805],
    [0.00000066693, 0.7120858344, 1685.2959399851],
    [0.00000050999, 4.21005408384, 2008.8013566425],
    [0.00000050585, 3.18331095946, 213.5429129215],
    [0.0000004585, 5.8116167451, 831.6119232661],
    [0.00000052339, 6.09582232771, 1038.2851066703],
    [0.00000046409, 0.92753148155, 524.5181566067],
    [0.00000049446, 1.18421196454, 963.6465204549],
    [0.00000045782, 0.27156151413, 535.35140854951],
    [0.00000061385, 1.06154014565, 1795.5022612045],
    [0.00000058958, 4.48450787354, 316.14805217309],
    [0.00000059833, 2.97158993654, 4.1759707466],
    [0.00000043525, 5.11993607277, 149.8070146181],
    [0.00000039973, 3.25434306386, 1383.13116433011],
    [0.0000005317, 6.26998243842, 750.3474250169],
    [0.00000039316, 5.15930242259, 1471.50920958009],
    [0.00000040288, 3.34770952676, 948.9317914863],
    [0.00000038303, 5.96851436892, 511.7755353134],
    [0.00000036523, 1.51420379775, 548.0940298428],
    [0.00000038571, 0.07822093186, 1258.21011414209],
    [0.00000035601, 1.24662275151, 10.538758222],
    [0.00000036868, 6.25234770646, 527.01402127131],
    [0.00000036603, 1.23015836922, 532.8555438849],
    [0.00000041197, 5.04821165837, 845.8390172677],
    [0.00000030575, 2.56475167146, 124.6772327045],
    [0.00000027619, 0.12568890457, 1802.6158082053],
    [0.00000032289, 0.79016845152, 618.3128278281],
    [0.0000002847, 4.61927587685, 1044.9110187041],
    [0.00000025452, 2.91722591057, 1265.32366114289],
    [0.00000027183, 1.12751765708, 1898.5950354231],
    [0.00000022512, 2.01936139354, 639.6534688305],
    [0.00000022622, 4.89596842874, 935.19233245171],
    [0.00000024508, 2.13953774929, 1361.79052332771],
    [0.0000002526, 0.24154081456, 540.98048284201],
    [0.00000020677, 5.55082476196, 1148.00379292269],
    [0.0000002819, 1.50681890023, 1905.70858242391],
    [0.00000020297, 5.38737168791, 1162.23088692429],
    [0.00000025685, 3.12279377202, 735.6326960483],
    [0.00000019769, 3.96513942756, 11.2895177474],
    [0.00000017928, 4.61925187754, 98.91680347199],
    [0.00000017469, 4.89788003858, 1787.9010792367],
    [0.00000018703, 6.07505587521, 1574.6019837987],
    [0.00000018135, 2.36351314755, 910.0625505381],
    [0.00000017089, 0.99046288782, 1603.5438067689],
    [0.00000017538, 4.47072594413, 525.7419968841],
    [0.00000017368, 3.01139967776, 534.1275682721],
    [0.00000019204, 3.80241402375, 1375.52998236229],
    [0.00000017455, 4.81942144274, 76.50988875911],
    [0.00000016153, 5.87162041441, 99.6675629974],
    [0.0000001646, 0.52556394714, 1788.38871420371],
    [0.00000015683, 5.56132216427, 2.9375762542],
    [0.00000016034, 0.27078811588, 191.7146369521],
    [0.00000015051, 4.36060419796, 106.0303504728],
    [0.00000014892, 0.20628294896, 518.8890823142],
    [0.00000015187, 1.3637774378, 1588.82907780029],
    [0.00000017388, 2.86695466117, 18.40306474821],
    [0.00000014796, 0.49390360799, 1049.3308069342],
    [0.00000015408, 2.49538144956, 106.5179854398],
    [0.00000017378, 2.04232991369, 88.6218627335],
    [0.00000013474, 2.61179172644, 1581.7155307995],
    [0.00000013574, 5.60777906786, 106.7811099982],
    [0.00000017733, 1.9626551783, 860.55374623631],
    [0.00000014099, 0.49552041586, 934.70469748469],
    [0.0000001469, 1.28998048526, 337.9763281425],
    [0.00000011717, 6.21548749349, 3178.38960805111],
    [0.00000010988, 0.56913717361, 2214.98690507971],
    [0.00000010909, 1.73441772451, 1052.02456570489],
    [0.00000011465, 4.40816469502, 1361.3028883607],
    [0.00000010506, 0.08856023326, 2104.7805838603],
    [0.00000012808, 3.66887031235, 96.2230447013],
    [0.00000013402, 6.1728481426, 721.8932370137],
    [0.00000010003, 5.29029166259, 1464.3956625793],
    [0.00000011029, 3.18683769269, 604.7163811454],
    [0.00000009807, 3.81416991065, 107.2687449652],
    [0.00000011312, 2.62059931029, 220.16882495529],
    [0.00000010028, 3.94766287245, 497.69145366371],
    [0.00000009515, 5.77311274657, 1890.9938534553],
    [0.00000010988, 5.2627232953, 2015.9149036433],
    [0.00000010134, 0.68933796308, 1592.498106505],
    [0.00000008954, 0.87046855862, 10.8018827804],
    [0.00000008739, 4.67223251717, 91.8032564712],
    [0.00000008399, 0.82244069816, 1148.49142788971],
    [0.00000008408, 0.96591596781, 1585.38455950421],
    [0.0000000923, 3.53443422146, 562.1781114925],
    [0.00000008186, 4.64550130925, 2104.2929488933],
    [0.00000008259, 2.22042436652, 302.40859313851],
    [0.000000099, 4.65877537869, 1478.62275658089],
    [0.00000010878, 2.27095143786, 113.6315324406],
    [0.00000009582, 4.37932327117, 455.1531840108],
    [0.00000007712, 1.30412279702, 422.9098550964],
    [0.00000007595, 0.02631225673, 629.846163059],
    [0.00000008496, 1.04067280887, 224.5886131854],
    [0.00000007414, 3.60338167449, 39.1130584317],
    [0.00000007292, 1.12702623915, 430.02340209721],
    [0.00000007357, 2.07742539313, 2655.8121899573],
    [0.00000007633, 6.03508479564, 636.95971005981],
    [0.00000007369, 0.7159608611, 2229.2139990813],
    [0.00000007258, 2.51814892716, 423.66061462181],
    [0.00000007648, 0.7571922027, 2001.68780964171],
    [0.00000008081, 1.31219730813, 1586.13531902961],
    [0.00000007334, 3.5736264817, 529.1840230527],
    [0.00000007334, 3.90865182026, 530.68554210351],
    [0.00000007088, 3.90573080708, 13.9832765181],
    [0.00000006944, 1.27959676844, 99.40443843901],
    [0.00000007575, 3.79999823386, 121.4958389668],
    [0.00000006848, 2.35876258225, 1898.10740045609],
    [0.0000000687, 5.86252805188, 1158.78636862821],
    [0.00000006772, 3.50813033017, 1048.58004740881],
    [0.00000007746, 3.5491138396, 1691.9218520189],
    [0.00000006468, 5.54893778542, 1165.89991562901],
    [0.00000006936, 4.92604014284, 953.3515797164],
    [0.00000006382, 0.76063043397, 1159.53712815361],
    [0.00000006464, 5.53982453249, 113.89465699899],
    [0.0000000627, 6.12875427425, 387.4851324443],
    [0.00000006557, 4.81011230587, 636.2089505344],
    [0.00000007405, 1.84721590721, 405.5013673571],
    [0.00000006424, 0.99818860411, 312.70353387701],
    [0.00000006311, 2.65837067079, 983.3596763971],
    [0.00000007257, 0.25978556818, 1251.0965671413],
    [0.00000006999, 3.09774680314, 323.2615991739],
    [0.00000005842, 0.50538293824, 1166.6506751544],
    [0.00000006084, 4.51074934327, 2538.4923217371],
    [0.00000005618, 0.0831645627, 71.09326278771],
    [0.0000000559, 0.34453029262, 234.8835539239],
    [0.00000005829, 4.88173947209, 1041.466500408],
    [0.00000006815, 6.01343806079, 305.10235190919],
    [0.00000005423, 4.10655824247, 114.38229196601],
    [0.00000005434, 1.33565656744, 1251.5842021083],
    [0.00000005984, 1.18424710557, 319.8170808778],
    [0.00000005352, 0.90568977859, 415.7963080956],
    [0.00000005826, 1.12913548074, 1891.4814884223],
    [0.00000005519, 2.07020279444, 1593.2488660304],
    [0.00000005189, 5.63081007242, 448.1826493619],
    [0.00000005286, 2.89186635254, 505.5557601899],
    [0.00000005876, 2.54689905929, 459.0853372739],
    [0.00000005578, 2.84516685445, 437.8877086234],
    [0.00000004953, 5.01729407226, 1780.78753223589],
    [0.00000004928, 3.111884814, 199.3158189199],
    [0.00000004972, 4.59041195194, 554.31380496631],
    [0.00000004889, 4.57426078554, 117.0760507367],
    [0.00000005942, 1.75505812286, 512.5262948388],
    [0.00000004807, 0.26863334445, 494.510059926],
    [0.00000005528, 1.80622642695, 430.7741616226],
    [0.00000004806, 0.21884952823, 956.04533848709],
    [0.0000000619, 5.04541957128, 2751.79141717511],
    [0.00000005306, 0.11969668866, 1069.92068841121],
    [0.00000004939, 5.49878249966, 2207.38572311189],
    [0.00000005203, 0.30883580794, 498.91529394111],
    [0.00000004397, 0.9304902682, 565.35950523021],
    [0.00000004342, 1.34852955452, 672.3844327119],
    [0.00000004528, 4.2172144488, 1677.6947580173],
    [0.00000004334, 1.86306609018, 611.6869157943],
    [0.00000004608, 5.66110590863, 679.4979797127],
    [0.00000004812, 0.89025719177, 560.9542712151],
    [0.00000004305, 1.60213053627, 1070.6714479366],
    [0.00000004662, 4.62198878885, 621.98185653281],
    [0.00000004362, 2.38936273723, 81.50831573269],
    [0.00000004781, 4.94273816108, 600.7842278823],
    [0.00000004148, 0.3438617819, 1080.9663886751],
    [0.00000004478, 5.54973564701, 629.0954035336],
    [0.00000004108, 0.28050115804, 644.0732570606],
    [0.00000004654, 0.26747143227, 508.10650660869],
    [0.0000000426, 0.28663615026, 209.87388421679],
    [0.00000005131, 5.19827010225, 946.23803271561],
    [0.00000003845, 0.02687662536, 970.7600674557],
    [0.00000003839, 4.39486053854, 2420.68481854989],
    [0.00000003898, 4.36796507234, 1064.29161411871],
    [0.00000004274, 3.88197021297, 31.9995114309],
    [0.00000003986, 3.61377428858, 952.60082019101],
    [0.0000000388, 3.72470409125, 504.8050006645],
    [0.00000005205, 4.2242564396, 1795.0146262375],
    [0.00000003879, 0.21645781655, 747.1660312792],
    [0.00000003965, 6.05218850802, 501.62360692681],
    [0.00000004541, 0.10865029183, 757.4609720177],
    [0.00000003663, 0.96855107175, 2318.0796792983],
    [0.00000004938, 1.24113099358, 294.80741117069],
    [0.00000003643, 3.75757419955, 555.0645644917],
    [0.0000000385, 0.10927703513, 835.28095197081],
    [0.00000003693, 1.43008979314, 558.2459582294],
    [0.00000003818, 3.56284581831, 2325.1932262991],
    [0.00000003422, 2.09047795615, 2214.4992701127],
    [0.00000003726, 0.01800308688, 740.0524842784],
    [0.00000003306, 0.56515315647, 2641.5850959557],
    [0.00000003331, 1.40804314394, 501.4805945749],
    [0.00000003289, 3.64076064476, 1066.2516597065],
    [0.00000004224, 5.6569200669, 547.34327031741],
    [0.00000003214, 4.63993723371, 498.4422131891],
    [0.00000003771, 1.62732535851, 1493.3374855495],
    [0.00000003357, 5.63168758175, 1272.4372081437],
    [0.00000003469, 1.82151805203, 1678.1823929843],
    [0.00000003147, 5.15767685182, 654.3681977991],
    [0.00000003122, 3.69868417138, 1912.8221294247],
    [0.00000003766, 6.26541380179, 1567.9760717649],
    [0.00000003766, 6.26541380179, 1567.48843679789],
    [0.00000003651, 3.33863747697, 2008.3137216755],
    [0.0000000335, 2.02935185038, 6276.2061204741],
    [0.00000002969, 2.84234108474, 561.4273519671],
    [0.00000002926, 0.87762167738, 824.9860112323],
    [0.00000003251, 1.48662260788, 6290.4332144757],
    [0.00000003134, 3.45182421255, 10206.4158166937],
    [0.00000003154, 1.31710977614, 483.4643596621],
    [0.00000002968, 0.9573438932, 597.60283414461],
    [0.00000003023, 3.68954971021, 938.3737261894],
    [0.00000003496, 3.80583016563, 1054.9598812267],
    [0.00000002718, 5.83851172606, 1151.6728216274],
    [0.00000003041, 2.90965702851, 10220.6429106953],
    [0.00000002652, 6.21650349274, 960.4651267172],
    [0.0000000272, 1.00932854817, 326.9306278786],
    [0.00000002672, 0.80664235757, 537.7990891043],
    [0.00000002672, 0.39245063721, 522.0704760519],
    [0.00000002641, 0.36790627076, 2531.3787747363],
    [0.00000002658, 1.14453224196, 1062.0734282275],
    [0.00000002567, 4.28770215521, 415.3086731286],
    [0.00000002847, 1.351252537, 1176.9456158929],
    [0.00000002545, 4.77644807792, 1098.9826235879],
    [0.00000002658, 5.35693010643, 1057.1780671179],
    [0.00000003084, 2.56963998299, 320.5678404032],
    [0.00000003075, 6.27507572432, 462.2667310116],
    [0.00000002804, 6.16567268722, 576.4052054941],
    [0.00000002606, 5.21906136752, 2523.7775927685],
    [0.00000003, 3.65608242169, 230.3207533419],
    [0.00000002425, 4.09514576387, 422.42222012939],
    [0.00000002483, 5.26115871401, 209.12312469139],
    [0.0000000239, 4.78653880453, 210.36151918381],
    [0.00000002327, 5.56730422259, 416.059432654],
    [0.00000002797, 0.30753315592, 2332.3067732999],
    [0.00000002273, 3.3290477661, 945.48727319021],
    [0.0000000298, 0.57215995151, 202.760337216],
    [0.00000002267, 4.77704986942, 2097.1794018925],
    [0.0000000233, 2.61194456361, 849.5080459724],
    [0.0000000294, 3.89100366694, 2111.40649589409],
    [0.00000002403, 1.43951577299, 433.46792039329],
    [0.00000002256, 1.40980672956, 1054.20912170131],
    [0.00000002203, 4.38408918114, 217.4750661846],
    [0.00000002189, 3.11420297739, 1514.5351142],
    [0.0000000212, 5.32964021512, 423.17297965479],
    [0.00000002093, 2.91578358954, 543.6742416127],
    [0.00000002373, 3.40448834117, 536.1545577016],
    [0.00000002373, 4.07778996079, 523.71500745461],
    [0.0000000204, 1.15053228876, 988.7763023685],
    [0.00000002105, 1.65182568239, 1059.5775635629],
    [0.00000002005, 0.23022912919, 460.7822583033],
    [0.00000001997, 0.01573125874, 504.66198831261],
    [0.00000002033, 0.46615032885, 1173.7642221552],
    [0.00000001976, 1.94247006692, 46.71424039951],
    [0.00000002284, 0.0816864042, 531.5793139808],
    [0.00000002284, 1.11740659058, 528.29025117541],
    [0.00000002219, 0.28864854659, 5230.5636493195],
    [0.00000002084, 3.79495631549, 490.5779066629],
    [0.0000000202, 3.27527557464, 568.0678182159],
    [0.00000001939, 0.63756905811, 1065.0423736441],
    [0.00000001972, 1.10124465701, 2428.2860005177],
    [0.0000000208, 5.31250252176, 194.89603068979],
    [0.00000001994, 1.00933853256, 749.8597900499],
    [0.00000001905, 1.9407611888, 1077.7849949374],
    [0.00000001909, 4.29377156648, 2737.0766882065],
    [0.00000001874, 1.18336173856, 555.2075768436],
    [0.00000002388, 2.65748069414, 334.7949344048],
    [0.00000002111, 0.80588667765, 5216.33655531789],
    [0.00000002086, 1.74158554893, 1062.5465089795],
    [0.00000002063, 1.7123979904, 9160.77334553909],
    [0.0000000193, 0.74728387158, 2207.8733580789],
    [0.00000001877, 0.19967253757, 732.93893727761],
    [0.00000001836, 4.07130877335, 1994.08662767389],
    [0.00000001907, 6.06525003405, 824.4983762653],
    [0.00000001819, 4.11575405255, 491.8017469403],
    [0.00000001892, 3.68926102357, 569.29165849331],
    [0.0000000177, 2.86237801037, 842.3944989716],
    [0.00000001786, 3.6883227342, 327.68138740401],
    [0.00000001761, 1.39220218514, 67.424234083],
    [0.00000001872, 2.05384799126, 1169.34443392509],
    [0.00000001951, 5.91395025443, 142.6934676173],
    [0.00000001737, 5.0443094844, 202.0095776906],
    [0.00000001965, 2.22844080314, 9146.54625153749],
    [0.00000001703, 1.79561638802, 2530.8911397693],
    [0.00000001717, 1.56523864144, 380.37158544351],
    [0.00000001684, 0.96892569776, 599.0873068529],
    [0.00000001669, 0.56251586275, 2634.47154895491],
    [0.00000001707, 3.13360819218, 92.2908914382],
    [0.00000001666, 4.51582119325, 1058.66253982621],
    [0.00000002249, 1.89939977026, 852.9525642685],
    [0.00000002105, 4.84963681002, 1059.67393178251],
    [0.00000001971, 5.97456261468, 1883.8803064545],
    [0.00000001682, 5.05358209402, 1905.2209474569],
    [0.00000001591, 1.71258004064, 2435.3995475185],
    [0.0000000187, 4.91045755022, 739.30172475301],
    [0.00000001831, 0.23036450981, 405.0137323901],
    [0.00000001741, 3.87703465673, 1280.0383901115],
    [0.00000001437, 0.15153485897, 1056.7049863659],
    [0.00000001666, 1.98564123475, 1060.5889555192],
    [0.00000001646, 3.31965590226, 299.37021175271],
    [0.00000001423, 5.06681929129, 1464.8832975463],
    [0.00000001879, 5.78203740511, 531.4192552864],
    [0.00000001879, 1.70024089685, 528.4503098698],
    [0.0000000146, 1.42660733495, 1269.743449373],
    [0.00000001684, 0.9064360157, 1364.9719170654],
    [0.00000001453, 1.55271946857, 526.2657538734],
    [0.000000017, 4.86312330636, 725.0746307514],
    [0.0000000136, 1.9393673407, 917.1760975389],
    [0.00000001426, 4.95337494898, 2840.1694624251],
    [0.00000001498, 3.83211973659, 1134.40734624],
    [0.0000000141, 4.97053896796, 1091.86907658711],
    [0.0000000152, 5.37749544795, 977.7306021046],
    [0.00000001747, 3.17984072825, 2324.70559133209],
    [0.00000001288, 3.95858951452, 732.1881777522],
    [0.00000001713, 3.60652551663, 2427.7983655507],
    [0.00000001282, 5.53618260525, 1475.1782382848],
    [0.00000001517, 1.63411439321, 1439.75351563271],
    [0.00000001271, 4.19498605517, 843.145258497],
    [0.00000001308, 5.87705324776, 558.3889705813],
    [0.00000001677, 0.97487380844, 611.1992808273],
    [0.00000001256, 4.41755923055, 2854.8841913937],
    [0.00000001366, 3.14960813536, 1446.8670626335],
    [0.00000001435, 4.97960275859, 991.9576961062],
    [0.00000001144, 5.29122600369, 1482.2917852856],
    [0.00000001142, 4.3946676897, 408.19512612779],
    [0.00000001147, 5.2894917786, 3068.1832868317],
    [0.00000001501, 5.53595039529, 75.0254160508],
    [0.00000001226, 3.45697923185, 1141.3778808889],
    [0.00000001323, 5.16542134486, 284.39235822571],
    [0.0000000115, 5.21811270268, 430.2865266556],
    [0.00000001292, 1.65611589428, 1994.5742626409],
    [0.00000001226, 2.47910206722, 372.77040347569],
    [0.00000001132, 3.62425240134, 1063.8185333667],
    [0.00000001079, 0.26090286718, 1483.042544811],
    [0.00000001111, 4.66761037682, 2413.5712715491],
    [0.00000001252, 5.7724730607, 473.31243127551],
    [0.00000001242, 2.94913211429, 539.4960101337],
    [0.00000001242, 1.39155353408, 520.37355502251],
    [0.00000001169, 1.94705823334, 386.9974974773],
    [0.00000001003, 1.4614408116, 216.9874312176],
    [0.0000000103, 3.78515085968, 850.25880549781],
    [0.00000001165, 1.66344587729, 2758.9049641759],
    [0.00000000984, 3.96978325817, 522.7730514675],
    [0.00000000984, 0.37090239019, 537.09651368871],
    [0.00000001015, 5.23058664749, 451.2210307477],
    [0.0000000131, 2.45586682061, 1354.6769763269],
    [0.00000001121, 2.24397477114, 4164.0681721295],
    [0.00000000956, 0.45045343285, 2950.8634186115],
    [0.0000000094, 5.04866396759, 39.6006933987],
    [0.00000000949, 0.52248659569, 1475.9289978102],
    [0.00000000992, 1.30939511951, 1969.4444807273],
    [0.00000000935, 3.89177610875, 3053.46855786309],
    [0.00000001085, 1.70979702342, 586.5571338807],
    [0.00000000901, 1.38326808068, 248.9676355736],
    [0.00000000894, 1.47962768735, 2847.28300942589],
    [0.00000000948, 4.80656003236, 2221.6128171135],
    [0.00000000923, 0.00868868373, 2421.1724535169],
    [0.0000000107, 5.69849027842, 2200.2721761111],
    [0.00000001169, 2.53153449921, 100.4012761803],
    [0.00000001005, 3.63845316069, 1432.6399686319],
    [0.00000001017, 3.67405924039, 8094.2778683491],
    [0.00000000984, 3.45627656974, 537.0001454691],
    [0.00000000984, 0.88440907863, 522.8694196871],
    [0.00000001118, 1.42327440603, 416.547067621],
    [0.00000000914, 5.81575314491, 1140.8902459219],
    [0.00000000977, 1.34926302993, 312.9666584354],
    [0.0000000084, 0.85450942681, 1579.0217720288],
    [0.00000000891, 0.04963060055, 486.64575339981],
    [0.00000000849, 0.94811547267, 834.7933170038],
    [0.00000000926, 2.6354929558, 532.6285413488],
    [0.00000000832, 2.25169167762, 608.64853440851],
    [0.00000000975, 3.40649349112, 21.0968235189],
    [0.00000000794, 5.26516657623, 1791.5701079414],
    [0.00000001006, 1.72593750499, 2310.9661322975],
    [0.00000000825, 1.82039899833, 8616.85528644289],
    [0.00000000827, 0.54227509993, 2545.6058687379],
    [0.00000000955, 1.09478150456, 760.01171843649],
    [0.00000000955, 4.23637415815, 760.4993534035],
    [0.00000000936, 1.28100839064, 155.53915477459],
    [0.00000000779, 0.26183378572, 1792.3208674668],
    [0.00000000766, 0.71363802237, 3811.1733473643],
    [0.00000000773, 3.84885148203, 738.814089786],
    [0.00000000788, 5.43030953147, 732.45130231059],
    [0.00000000801, 3.05581987419, 77204.08367704989],
    [0.00000000937, 6.26646142496, 297.9888049084],
    [0.00000000779, 3.79015371961, 538.0115374254],
    [0.00000000779, 0.55053192876, 521.8580277308],
    [0.00000000755, 2.10425922159, 8631.0823804445],
    [0.00000000743, 3.4983481841, 1060.1470125345],
    [0.0000000079, 3.19521603309, 902.94900353731],
    [0.00000000897, 1.19433126461, 1485.7363035817],
    [0.00000000991, 3.33499486125, 2744.1902352073],
    [0.0000000074, 5.64369354959, 277.2788112249],
    [0.0000000078, 5.38986403689, 606.2008538537],
    [0.00000000738, 1.96155322417, 4856.32818355191],
    [0.00000000799, 1.14946240957, 573.2238117564],
    [0.00000000802, 2.35697578389, 984.8441491054],
    [0.00000000761, 0.74324276764, 2744.6778701743],
    [0.00000000735, 3.91525398793, 4650.1426351147],
    [0.00000000721, 3.82827689917, 731.70054278519],
    [0.0000000085, 2.33025907115, 775.4772069305],
    [0.00000000717, 5.22051515031, 5746.0275204125],
    [0.00000000754, 3.0116216035, 202.4972126576],
    [0.00000000787, 1.45241015286, 320.0802054362],
    [0.00000000739, 4.250496621, 967.57867371801],
    [0.00000000744, 0.24478158041, 2847.77064439291],
    [0.00000000684, 5.02015802407, 1798.68365494221],
    [0.000000007, 4.52571213685, 572.473052231],
    [0.000000007, 2.95656616511, 487.3965129252],
    [0.0000000069, 1.37931038856, 2118.5200428949],
    [0.0000000067, 2.76522726571, 245.2986068689],
    [0.00000000668, 5.20188694033, 739.5648493114],
    [0.00000000667, 5.58822887801, 1013.1553247567],
    [0.00000000762, 0.14158644002, 9153.6597985383],
    [0.00000000711, 4.6824948525, 3156.5613320817],
    [0.00000000679, 5.25016144281, 24498.58642880689],
    [0.00000000729, 4.80734453852, 4547.04986089611],
    [0.00000000692, 4.62037992194, 5062.5137319891],
    [0.00000000649, 6.27552774113, 1799.4344144676],
    [0.00000000677, 2.25267578062, 10.051123255],
    [0.00000000784, 5.42419314811, 3281.4823822697],
    [0.00000000733, 2.27993558439, 453.66871130251],
    [0.00000000643, 4.14281979615, 2310.4784973305],
    [0.00000000658, 1.58035282058, 305.85311143459],
    [0.00000000784, 2.49180999721, 74.53778108379],
    [0.00000000704, 5.13288018853, 5165.60650620771],
    [0.00000000648, 0.46023761646, 1382.64352936309],
    [0.00000000786, 4.88358448252, 1290.19031849811],
    [0.00000000844, 6.14413478231, 312.21589891],
    [0.00000000703, 4.75268520401, 2288.1002260279],
    [0.00000000703, 5.25408808776, 2273.8731320263],
    [0.00000000797, 2.87597815652, 2641.0974609887],
    [0.00000000635, 2.1451824683, 397.9001853893],
    [0.00000000607, 1.30612000311, 1689.2280932482],
    [0.00000000626, 0.3922457859, 2524.2652277355],
    [0.00000000636, 4.99095278095, 511.2879003464],
    [0.00000000613, 0.56214188686, 1037.7974717033],
    [0.00000000614, 3.18089955415, 2957.9769656123],
    [0.00000000747, 5.14974622689, 5223.4501023187],
    [0.00000000606, 0.77338936404, 1751.2957139325],
    [0.00000000779, 4.30366040804, 523.7844434238],
    [0.00000000779, 0.03702524033, 536.08512173241],
    [0.00000000607, 1.35240171145, 2133.2347718635],
    [0.00000000744, 6.04795940886, 643.32249753521],
    [0.00000000697, 0.66536766751, 1354.18934135989],
    [0.00000000669, 3.25849716631, 5069.6272789899],
    [0.00000000762, 1.79392292274, 1262.6299023722],
    [0.00000000765, 0.61378577745, 927.5911504839],
    [0.0000000072, 1.48952280347, 3075.2968338325],
    [0.00000000573, 5.9753572436, 394.5986794451],
    [0.00000000634, 6.09733077732, 470.1310375378],
    [0.00000000559, 0.92745429765, 445.00125562421],
    [0.00000000671, 4.7293136826, 454.6655490438],
    [0.00000000755, 1.4318712154, 105.2966372899],
    [0.00000000567, 5.33251485606, 1887.5493351592],
    [0.00000000593, 5.99788761622, 842.65762352999],
    [0.00000000564, 2.51973397119, 1127.2937992392],
    [0.00000000547, 0.43054759456, 4127.5652170209],
    [0.00000000624, 2.9526178125, 25035.39094090229],
    [0.00000000545, 6.09691062396, 810.90192958261],
    [0.00000000641, 1.20453451725, 305.5899868762],
    [0.00000000593, 1.40845707752, 1063.0702659688],
    [0.00000000574, 0.22531417131, 1699.0353990197],
    [0.00000000616, 3.45400333076, 25021.16384690069],
    [0.00000000721, 2.41192409328, 1819.8812835927],
    [0.00000000537, 1.85187456995, 782.59075393131],
    [0.00000000597, 4.07180274826, 379.8839504765],
    [0.00000000543, 3.12698436492, 216.72430665921],
    [0.00000000552, 0.25020791353, 1268.9926898476],
    [0.00000000534, 6.16996002402, 437.136949098],
    [0.00000000588, 5.43198241681, 460.2946233363],
    [0.00000000524, 4.47141172676, 518.40144734719],
    [0.00000000701, 0.58425032979, 1670.5812110165],
    [0.00000000632, 5.83508891293, 4525.7092198937],
    [0.00000000546, 3.16244281187, 89.10949770051],
    [0.00000000496, 4.51139575372, 3171.2760610503],
    [0.00000000501, 4.75534479759, 32.48714639791],
    [0.00000000508, 4.65099599522, 827.67977000299],
    [0.00000000493, 3.86150271006, 10022.0810975829],
    [0.0000000055, 5.31707353623, 2516.66404576769],
    [0.00000000546, 1.3849475891, 589.7385276184],
    [0.00000000509, 0.35849492381, 4686.6455902233],
    [0.00000000505, 0.21007516833, 754.27957828001],
    [0.00000000479, 3.15486072496, 5223.93773728571],
    [0.00000000461, 2.56623041309, 1595.9426248011],
    [0.00000000472, 0.95774392273, 3163.6748790825],
    [0.00000000472, 0.95774392273, 3164.1625140495],
    [0.00000000509, 5.55791627029, 69.3963417583],
    [0.00000000546, 0.44435269123, 2840.6570973921],
    [0.00000000615, 0.32730812757, 519.15220687259],
    [0.00000000579, 4.02359849872, 525.514994348],
    [0.00000000455, 5.55680477419, 1468.06469128401],
    [0.00000000451, 0.2716200267, 614.868309532],
    [0.00000000451, 4.98348360302, 2107.96197759801],
    [0.0000000045, 0.83061588531, 3480.06674873909],
    [0.0000000045, 0.83061588531, 3480.5543837061],
    [0.00000000447, 6.20310325477, 3267.2552882681],
    [0.00000000467, 0.09916917853, 1490.15609181181],
    [0.00000000472, 5.54856635272, 1457.2821155785],
    [0.00000000462, 5.48144983275, 26617.8379241523],
    [0.0000000044, 5.31113210528, 3384.08752152129],
    [0.0000000044, 5.31113210528, 3384.5751564883],
    [0.00000000453, 4.59459163866, 9154.1474335053],
    [0.0000000044, 4.77291542298, 2538.00468677009],
    [0.00000000616, 0.11097190779, 1560.3748897971],
    [0.00000000437, 3.78589316644, 4966.5345047713],
    [0.00000000433, 0.72851985281, 4700.87268422489],
    [0.00000000439, 0.00874316549, 2108.7127371234],
    [0.00000000452, 3.24655844352, 1551.1836771295],
    [0.00000000483, 0.54583867389, 629.35852809199],
    [0.00000000455, 2.09561269155, 1368.4164353615],
    [0.00000000454, 1.06884234808, 1884.36794142151],
    [0.00000000476, 2.84297109529, 3060.5821048639],
    [0.00000000414, 5.93250814925, 533.37930087419],
    [0.00000000434, 4.40957688009, 622.2449810912],
    [0.00000000434, 1.2679842265, 622.7326160582],
    [0.00000000423, 6.0975649978, 415.04804069769],
    [0.00000000411, 2.21364343296, 4539.44867892829],
    [0.00000000411, 2.21364343296, 4539.9363138953],
    [0.00000000507, 2.4615699904, 3252.5405592995],
    [0.00000000401, 0.60477521531, 1040.97886544099],
    [0.00000000424, 0.17468685146, 1254.765595846],
    [0.00000000407, 1.50695117865, 665.27088571111],
    [0.00000000428, 4.09362449264, 12036.21691740469],
    [0.00000000487, 4.98974857689, 1901.7764291608],
    [0.00000000484, 1.19386220714, 1357.8583700646],
    [0.00000000435, 4.56496977263, 2729.96314120569],
    [0.00000000435, 1.42337711904, 2730.45077617271],
    [0.00000000393, 3.70194655878, 3803.5721653965],
    [0.00000000393, 3.70194655878, 3804.0598003635],
    [0.00000000396, 2.29672548563, 1020.2688717575],
    [0.00000000413, 0.90721614242, 1902.5271886862],
    [0.00000000438, 5.82247234506, 611.8299281462],
    [0.00000000404, 1.67645195925, 2042.7416065863],
    [0.00000000412, 4.61028536998, 4863.4417305527],
    [0.00000000379, 0.15728961892, 4443.9570866775],
    [0.00000000528, 6.10721110527, 721.40560204669],
    [0.00000000392, 5.54718824078, 2001.2001746747],
    [0.00000000379, 0.35077315636, 9676.23721663209],
    [0.00000000379, 3.49236580995, 9676.7248515991],
    [0.00000000372, 3.07971309061, 3273.8812003019],
    [0.00000000372, 3.0797130906, 3274.36883526891],
];

const Y2: &[Term] = &[
    [0.00202462055, 0.59792458091, 529.9347825781],
    [0.00132313738, 3.89295968796, 0.2438174835],
    [0.00123752958, 2.55853913064, 522.8212355773],
    [0.00121682952, 4.91767938901, 537.0483295789],
    [0.000357197, 3.45512045921, 1059.6257476727],
    [0.00011394908, 0.15831191722, 7.3573644843],
    [0.0000705366, 5.44857872902, 1066.7392946735],
    [0.00005684733, 2.05222271085, 1052.51220067191],
    [0.00005262466, 2.69780996624, 515.70768857651],
    [0.00003815469, 3.98689525353, 1589.3167127673],
    [0.00003706857, 4.78859671078, 544.1618765797],
    [0.00001449544, 1.07785028902, 110.45013870291],
    [0.00001046768, 0.75395840567, 426.8420083595],
    [0.0000132248, 0.05697677565, 14.47091148511],
    [0.00000858857, 0.30653313914, 633.0275567967],
    [0.00000887013, 3.09315872764, 526.7533888404],
    [0.00000866197, 4.38230951425, 533.1161763158],
    [0.0000099714, 6.17027795984, 323.74923414091],
    [0.00000563455, 0.04960726876, 949.4194264533],
    [0.00000571107, 1.58632661254, 1045.3986536711],
    [0.00000519207, 4.39249603222, 526.00262931501],
    [0.00000607942, 1.27749143447, 736.1203310153],
    [0.00000506922, 3.07709057807, 533.8669358412],
    [0.00000485331, 3.17541273379, 109.9625037359],
    [0.00000475072, 5.78207162854, 529.44714761109],
    [0.0000045827, 5.95238630892, 1596.43025976811],
    [0.00000418781, 1.04079958107, 117.5636857037],
    [0.00000525152, 1.9826366184, 102.84895673509],
    [0.00000374437, 0.84144118564, 95.7354097343],
    [0.00000412815, 5.0421283887, 103.3365917021],
    [0.00000320928, 2.67288808735, 419.72846135871],
    [0.00000322793, 4.41855165225, 2119.00767786191],
    [0.00000302747, 1.8468131577, 205.9417309537],
    [0.00000280926, 2.12468407469, 1582.2031657665],
    [0.00000243003, 1.57275553426, 625.9140097959],
    [0.00000260213, 2.10127305773, 956.53297345411],
    [0.00000223206, 5.59326372578, 433.9555553603],
    [0.00000219874, 0.15087500723, 942.3058794525],
    [0.00000202904, 5.19995521771, 220.6564599223],
    [0.00000196744, 4.4288392047, 1169.83206889211],
    [0.00000171475, 2.19448427444, 6.86972951729],
    [0.00000195569, 4.41657624168, 640.1411037975],
    [0.00000165172, 3.71383053394, 316.6356871401],
    [0.00000163913, 5.23556107603, 1073.85284167431],
    [0.00000164904, 1.98636179817, 1155.6049748905],
    [0.00000138497, 2.85820387486, 508.5941415757],
    [0.0000013564, 1.81977900596, 198.82818395289],
    [0.00000170382, 6.03512783536, 330.8627811417],
    [0.00000123801, 3.67192968217, 743.23387801611],
    [0.00000105922, 1.1024264118, 853.4401992355],
    [0.00000104749, 2.62023485267, 522.3336006103],
    [0.00000115508, 2.71991945901, 309.0345051723],
    [0.00000127421, 1.4185346245, 729.0067840145],
    [0.00000104374, 0.89194130513, 213.5429129215],
    [0.00000074731, 4.62028784658, 551.27542358051],
    [0.00000076056, 2.59067478621, 1265.81129610991],
    [0.00000084864, 3.26374582961, 519.63984183961],
    [0.00000085433, 4.07536581059, 213.0552779545],
    [0.0000007025, 2.97938769876, 426.3543733925],
    [0.00000070226, 5.88545650951, 206.42936592071],
    [0.00000065869, 2.26360027552, 839.2131052339],
    [0.00000062918, 2.84024006922, 412.6149143579],
    [0.00000067605, 4.19524535793, 540.2297233166],
    [0.0000007197, 1.7614938857, 419.2408263917],
    [0.00000053452, 5.96965868749, 3.42521122121],
    [0.00000052805, 0.64612484946, 412.12727939089],
    [0.00000055599, 6.1914281599, 21.5844584859],
    [0.00000046667, 5.0676591631, 227.77000692311],
    [0.00000048911, 4.88627603894, 1062.80714141041],
    [0.00000046046, 1.69944877998, 536.5606946119],
    [0.00000049381, 2.96227489837, 1162.7185218913],
    [0.00000039853, 2.83106272106, 1258.6977491091],
    [0.00000038964, 3.82409926208, 309.5221401393],
    [0.00000038082, 4.25027357628, 441.06910236111],
    [0.00000032665, 3.0723899477, 1692.40948698591],
    [0.00000031801, 0.14719940852, 2126.1212248627],
    [0.0000003651, 2.83147334737, 1056.444353935],
    [0.00000040831, 1.76738911692, 1575.08961876571],
    [0.00000031242, 2.99902293895, 618.8004627951],
    [0.00000032827, 1.87547695506, 515.2200536095],
    [0.00000028849, 5.03497321398, 1055.6935944096],
    [0.00000032224, 4.96133890377, 1272.9248431107],
    [0.00000028682, 1.53844011595, 1038.2851066703],
    [0.0000002943, 3.21972350654, 1486.2239385487],
    [0.0000003415, 2.79751290016, 301.9209581715],
    [0.00000032088, 2.52348716505, 625.42637482889],
    [0.0000002417, 2.39467034468, 832.0995582331],
    [0.00000023462, 0.52036917801, 1059.1381127057],
    [0.00000023622, 2.60159482405, 742.74624304909],
    [0.00000025413, 3.79378187392, 1368.9040703285],
    [0.00000025008, 4.81402651995, 2648.6986429565],
    [0.00000019641, 3.29857408882, 1063.55790093581],
    [0.00000020824, 4.96156233332, 1699.5230339867],
    [0.00000018958, 1.33062268278, 838.72547026689],
    [0.00000019085, 0.27421860784, 1479.11039154791],
    [0.00000020467, 4.52802295353, 647.25465079831],
    [0.00000018387, 0.90119440297, 1471.9968445471],
    [0.00000016332, 0.27219099833, 728.5191490475],
    [0.00000018784, 1.39830492533, 735.6326960483],
    [0.0000001314, 0.04984430125, 1376.0176173293],
    [0.00000014219, 0.85329624536, 124.6772327045],
    [0.00000012676, 1.25087875699, 831.6119232661],
    [0.00000012289, 5.75436340555, 10.538758222],
    [0.00000011203, 1.59407227495, 511.7755353134],
    [0.00000012667, 5.7768810183, 963.6465204549],
    [0.00000013805, 2.26287537924, 2111.8941308611],
    [0.00000010749, 5.88274412057, 548.0940298428],
    [0.00000012863, 4.47014391443, 750.3474250169],
    [0.00000012393, 2.34379668336, 1685.2959399851],
    [0.00000012549, 2.17268947101, 941.8182444855],
    [0.00000010468, 0.30458009626, 935.19233245171],
    [0.00000008995, 1.74960944229, 1383.13116433011],
    [0.00000011159, 2.51015843852, 618.3128278281],
    [0.00000007631, 5.05979604407, 632.5399218297],
    [0.00000007503, 5.67188098812, 1603.5438067689],
    [0.00000007708, 1.95453603914, 191.7146369521],
    [0.00000007383, 1.13509741924, 1155.1173399235],
    [0.00000008531, 3.84811863075, 1361.79052332771],
    [0.00000008011, 5.88118865782, 337.9763281425],
    [0.00000007223, 3.84606265734, 88.6218627335],
    [0.00000007778, 1.36850966173, 1052.02456570489],
    [0.00000007476, 1.59564508061, 721.8932370137],
    [0.00000005663, 3.52114816133, 2222.1004520805],
    [0.00000005661, 0.0046094541, 1044.9110187041],
    [0.00000005318, 0.95938503716, 1148.00379292269],
    [0.00000004988, 0.39989410631, 639.6534688305],
    [0.00000005093, 2.58948327756, 106.0303504728],
    [0.00000006533, 3.4807936539, 845.8390172677],
    [0.00000006385, 0.35391558166, 860.55374623631],
    [0.00000004988, 1.4135405418, 99.6675629974],
    [0.00000005571, 2.8144440446, 1795.5022612045],
    [0.00000005541, 2.42198547004, 1049.3308069342],
    [0.00000005247, 1.8829596436, 1258.21011414209],
    [0.00000004445, 3.79759027615, 846.3266522347],
    [0.0000000399, 4.743981157, 1802.6158082053],
    [0.00000003926, 2.16218108184, 497.69145366371],
    [0.00000003892, 3.84670029567, 302.40859313851],
    [0.00000003809, 3.73909928384, 2.9375762542],
    [0.0000000362, 5.32009722771, 562.1781114925],
    [0.0000000476, 2.22483727905, 934.70469748469],
    [0.00000004154, 5.29683004255, 96.2230447013],
    [0.00000003877, 2.20085136203, 1375.52998236229],
    [0.00000003522, 3.09584301581, 501.4805945749],
    [0.00000003445, 2.530991329, 1148.49142788971],
    [0.00000003382, 4.8906034328, 234.8835539239],
    [0.00000003592, 3.66643310344, 405.5013673571],
    [0.00000003808, 2.35607884579, 1788.38871420371],
    [0.00000003336, 0.8792603484, 1471.50920958009],
    [0.00000003758, 0.45509718094, 113.6315324406],
    [0.00000003174, 3.90621979282, 448.1826493619],
    [0.00000003698, 1.01340900246, 220.16882495529],
    [0.00000003101, 3.18331755184, 316.14805217309],
    [0.00000002746, 4.17978592068, 81.50831573269],
    [0.00000002816, 4.07738334997, 2015.9149036433],
    [0.00000002754, 5.70117381714, 430.02340209721],
    [0.00000002783, 1.81572481299, 2104.7805838603],
    [0.00000003501, 4.6182832631, 1069.92068841121],
    [0.0000000258, 2.70735869418, 98.91680347199],
    [0.00000002605, 3.58250505073, 611.6869157943],
    [0.00000002955, 5.33795885153, 1592.498106505],
    [0.00000003418, 0.91402819173, 1368.4164353615],
    [0.00000002482, 6.19470895878, 1361.3028883607],
    [0.00000002409, 5.6509830169, 107.2687449652],
    [0.0000000245, 1.82798028749, 948.9317914863],
    [0.00000002454, 3.07591757821, 1251.5842021083],
    [0.00000002443, 0.80546406296, 1464.3956625793],
    [0.00000002848, 3.22965138097, 1898.5950354231],
    [0.00000002434, 4.87638273487, 1080.9663886751],
    [0.0000000224, 1.77459488806, 629.846163059],
    [0.00000002676, 2.93522198834, 294.80741117069],
    [0.00000002252, 4.20412336387, 423.66061462181],
    [0.00000002207, 1.26929749414, 106.7811099982],
    [0.00000002966, 0.61692584962, 106.5179854398],
    [0.00000002114, 2.97133804999, 117.0760507367],
    [0.00000002234, 3.71703805766, 6276.2061204741],
    [0.00000002232, 6.07586800494, 6290.4332144757],
    [0.0000000206, 0.61396711293, 2655.8121899573],
    [0.00000002492, 1.55690527788, 1574.6019837987],
    [0.00000002405, 3.402551153, 1162.23088692429],
    [0.00000002094, 4.26293458943, 13.9832765181],
    [0.00000001997, 2.59413376987, 2008.8013566425],
    [0.00000001998, 3.66897172067, 149.8070146181],
    [0.00000002075, 5.13994005595, 10206.4158166937],
    [0.00000002073, 1.2155865563, 10220.6429106953],
    [0.00000001833, 2.60928669023, 824.9860112323],
    [0.0000000194, 5.08767479418, 199.3158189199],
    [0.00000001989, 1.62630471057, 323.2615991739],
    [0.00000001764, 4.69152602347, 970.7600674557],
    [0.00000002079, 0.16395458213, 1905.70858242391],
    [0.00000001815, 1.60120314289, 1265.32366114289],
    [0.00000001815, 4.28784753553, 558.3889705813],
    [0.00000001819, 3.79124340355, 1165.89991562901],
    [0.00000002303, 1.95114448415, 1251.0965671413],
    [0.00000001797, 5.48846817914, 1585.38455950421],
    [0.00000001785, 2.60041060537, 1159.53712815361],
    [0.00000001719, 3.18124488238, 654.3681977991],
    [0.00000002106, 2.00507240636, 508.10650660869],
    [0.00000001746, 2.85410644796, 1586.13531902961],
    [0.00000001693, 1.86129406512, 1691.9218520189],
    [0.0000000156, 2.48952478561, 2001.68780964171],
    [0.00000001635, 0.62669051313, 1787.9010792367],
    [0.00000001492, 5.75772456494, 422.9098550964],
    [0.00000001558, 3.23097345434, 636.2089505344],
    [0.00000001753, 4.84300262737, 757.4609720177],
    [0.00000001757, 5.31425455438, 3178.38960805111],
    [0.00000001411, 4.82184730987, 956.04533848709],
    [0.00000001925, 1.69879574514, 1567.9760717649],
    [0.00000001563, 2.82364433424, 1891.4814884223],
    [0.00000001383, 4.8728658635, 5230.5636493195],
    [0.00000001393, 2.5041002146, 1280.0383901115],
    [0.00000001381, 2.51458784132, 5216.33655531789],
    [0.00000001548, 0.7463807945, 946.23803271561],
    [0.00000001239, 1.3395882762, 543.6742416127],
    [0.00000001373, 1.17035918011, 1890.9938534553],
    [0.00000001198, 5.50480829771, 326.9306278786],
    [0.0000000122, 5.64182300635, 319.8170808778],
    [0.00000001357, 5.70946834472, 2229.2139990813],
    [0.00000001271, 0.01266765679, 9160.77334553909],
    [0.00000001268, 3.93758835915, 9146.54625153749],
    [0.00000001183, 1.68810975581, 636.95971005981],
    [0.00000001254, 6.07103801223, 433.46792039329],
    [0.0000000118, 0.55156432114, 1780.78753223589],
    [0.00000001421, 3.61381859664, 1678.1823929843],
    [0.00000001111, 3.54163507553, 910.0625505381],
    [0.00000001135, 3.99300516499, 540.98048284201],
    [0.00000001425, 0.59800839792, 1684.80830501809],
    [0.00000001101, 0.33268231661, 518.8890823142],
    [0.00000001052, 0.87116249009, 1493.3374855495],
    [0.00000000954, 2.13166225661, 1066.2516597065],
    [0.00000001305, 3.68417944671, 5223.4501023187],
    [0.00000000932, 1.81701400569, 952.60082019101],
    [0.00000001152, 4.15622157039, 3281.4823822697],
    [0.00000001271, 2.91723787442, 1478.62275658089],
    [0.00000000993, 2.42220158667, 2427.7983655507],
    [0.00000001202, 1.66398680721, 1567.48843679789],
    [0.00000000952, 2.83462623397, 2325.1932262991],
    [0.00000000904, 3.88771946892, 1158.78636862821],
    [0.00000001185, 2.82656778833, 2214.98690507971],
    [0.00000000965, 2.41761451411, 2428.2860005177],
    [0.00000000862, 3.45873513038, 5753.14106741329],
    [0.00000001183, 0.56670778502, 953.3515797164],
    [0.00000000858, 5.60347835412, 749.8597900499],
    [0.00000000857, 5.92079986515, 1677.6947580173],
    [0.00000000896, 4.05090365368, 1272.4372081437],
    [0.00000000838, 1.8534532559, 740.0524842784],
    [0.0000000081, 1.99086557504, 732.93893727761],
    [0.00000000899, 1.44837834416, 1581.7155307995],
    [0.00000001107, 1.52991417673, 1912.8221294247],
    [0.00000001099, 1.63363197193, 21.0968235189],
    [0.00000000856, 0.26870253693, 210.36151918381],
    [0.00000000792, 4.88168256779, 9683.35076363289],
    [0.00000000803, 2.43011635326, 2641.5850959557],
    [0.00000001013, 0.26382735728, 852.9525642685],
    [0.0000000079, 2.45929735954, 1166.6506751544],
    [0.00000000927, 2.40548084691, 202.760337216],
    [0.00000000955, 2.63053495096, 611.1992808273],
    [0.00000000848, 1.52904158095, 824.4983762653],
    [0.00000000721, 3.87768985281, 4693.75913722409],
    [0.00000000732, 5.25617010486, 1141.3778808889],
    [0.00000000717, 3.4747357381, 2538.4923217371],
    [0.00000000764, 1.02089435958, 3789.8327063619],
    [0.00000000757, 2.29144101005, 422.42222012939],
    [0.0000000087, 1.7047499202, 3900.0390275813],
    [0.00000000745, 1.11551269154, 416.059432654],
    [0.00000000786, 1.87783459546, 3590.7607049255],
    [0.00000000722, 0.69162917181, 1809.72935520611],
    [0.00000000731, 1.56640382879, 2008.3137216755],
    [0.00000000784, 2.40595880647, 1795.0146262375],
    [0.00000000655, 5.29949669283, 8623.96883344369],
    [0.00000000859, 4.45239063404, 459.0853372739],
    [0.00000000787, 3.89498804276, 1671.06884598351],
    [0.00000000668, 0.46476131572, 2545.6058687379],
    [0.00000000707, 0.44824026865, 1169.34443392509],
    [0.00000000679, 0.69182567589, 1588.82907780029],
    [0.00000000721, 0.46106254321, 2104.2929488933],
    [0.00000000869, 2.05707977661, 3576.5336109239],
    [0.00000000878, 5.49426984828, 75.0254160508],
    [0.00000000883, 2.87549710098, 3384.5751564883],
    [0.00000000627, 2.60545252272, 405.0137323901],
    [0.00000000776, 2.36750552228, 927.5911504839],
    [0.00000000751, 3.92531642097, 3597.8742519263],
    [0.00000000821, 3.33729170182, 3487.66793070691],
    [0.00000000603, 2.24262715346, 2318.0796792983],
    [0.00000000766, 3.89405071692, 1354.6769763269],
    [0.00000000679, 0.93833494617, 2207.38572311189],
    [0.0000000082, 4.88672199584, 6283.3196674749],
    [0.00000000638, 0.90714252231, 3370.34806248671],
    [0.00000000711, 1.29280470587, 1883.8803064545],
    [0.00000000666, 1.22953421972, 3693.8534791441],
    [0.00000000785, 3.49527016473, 3149.44778508089],
    [0.00000000566, 0.13027536492, 2861.9977383945],
    [0.00000000781, 1.4148563587, 3796.94625336271],
    [0.00000000719, 3.02988768028, 600.7842278823],
    [0.00000000586, 3.97655750409, 732.45130231059],
    [0.00000000546, 0.87759549299, 437.8877086234],
    [0.00000000539, 3.3933368449, 209.12312469139],
    [0.00000000659, 2.59360004759, 2207.8733580789],
    [0.00000000617, 2.08977841036, 2744.6778701743],
    [0.00000000617, 2.08977841036, 2744.1902352073],
    [0.00000000687, 2.15934118066, 209.87388421679],
    [0.00000000566, 4.70636247947, 526.2657538734],
    [0.0000000064, 3.60830260468, 1987.4607156401],
    [0.00000000623, 2.21578255427, 3274.36883526891],
    [0.00000000623, 2.21578255427, 3273.8812003019],
    [0.00000000682, 4.78157060479, 2332.3067732999],
    [0.00000000719, 5.11346846815, 9153.6597985383],
    [0.00000000547, 0.34236516611, 2097.1794018925],
    [0.00000000705, 2.59491824208, 3700.96702614491],
    [0.00000000574, 3.41963712247, 430.7741616226],
    [0.00000000543, 0.88081760855, 1457.2821155785],
    [0.00000000693, 0.33025900018, 2001.2001746747],
    [0.00000000659, 2.96839974316, 3804.0598003635],
    [0.00000000581, 2.15878783346, 2111.40649589409],
    [0.0000000054, 6.13903070975, 2729.96314120569],
    [0.00000000653, 6.09326422469, 2626.8703669871],
    [0.00000000673, 3.08841787143, 416.547067621],
    [0.00000000541, 0.97608919869, 2214.4992701127],
    [0.00000000463, 3.71557681634, 529.88659846831],
    [0.00000000463, 0.63020265214, 529.9829666879],
    [0.00000000453, 5.18763231998, 5753.6287023803],
    [0.00000000499, 1.74748261623, 2421.1724535169],
    [0.00000000456, 3.28830064335, 76.50988875911],
    [0.00000000587, 1.1366083899, 527.4871020233],
    [0.00000000505, 1.06180904724, 532.6285413488],
    [0.00000000582, 3.20768877862, 532.3824631329],
    [0.00000000517, 0.69632241122, 2523.7775927685],
    [0.00000000475, 2.88817124373, 2531.3787747363],
    [0.00000000433, 0.32149741104, 621.98185653281],
    [0.0000000053, 3.32159958445, 512.5262948388],
    [0.0000000053, 1.01908606392, 547.34327031741],
    [0.00000000478, 3.50052966452, 1593.2488660304],
    [0.00000000423, 0.32742738106, 9683.8383985999],
    [0.00000000592, 1.66841184917, 2324.70559133209],
    [0.0000000041, 4.13116496171, 2751.30378220809],
    [0.00000000507, 2.10021567641, 1243.98302014049],
    [0.00000000521, 1.4600138784, 4216.4308972379],
    [0.00000000458, 4.03023009406, 629.0954035336],
    [0.00000000508, 3.32555628701, 1994.5742626409],
    [0.00000000508, 0.18396363342, 1994.08662767389],
    [0.00000000452, 4.24985614624, 3.6883357796],
    [0.00000000527, 2.84159709661, 597.60283414461],
    [0.00000000527, 4.64068120535, 462.2667310116],
    [0.00000000555, 1.79977655362, 3892.92548058051],
    [0.00000000464, 3.31404699259, 1905.2209474569],
    [0.00000000535, 2.60058723927, 2943.74987161071],
    [0.00000000535, 5.74217989286, 2943.26223664369],
    [0.0000000045, 3.73627122155, 3914.26612158291],
    [0.0000000039, 4.12428063042, 2751.79141717511],
    [0.00000000511, 4.46664359519, 643.32249753521],
    [0.00000000431, 0.85128279093, 849.5080459724],
    [0.00000000464, 6.26761999534, 2633.98391398789],
    [0.00000000486, 3.27293685238, 2303.8525852967],
    [0.00000000412, 6.19787080325, 2758.9049641759],
    [0.00000000423, 1.17747515264, 1898.10740045609],
    [0.00000000457, 5.26603357261, 519.15220687259],
    [0.0000000053, 2.82489810933, 2221.6128171135],
    [0.00000000443, 5.28863656813, 89.10949770051],
    [0.00000000478, 0.39094045474, 2420.68481854989],
];

const Y3: &[Term] = &[
    [0.00016990902, 4.27247332045, 522.8212355773],
    [0.00016795793, 3.18563475573, 537.0483295789],
    [0.00005535565, 5.40269185025, 0.2438174835],
    [0.00001711756, 1.8007087102, 1059.6257476727],
    [0.00001437893, 4.40672411903, 515.70768857651],
    [0.00001080832, 3.8390305374, 1066.7392946735],
    [0.00001014927, 3.07247314388, 544.1618765797],
    [0.0000108032, 4.63909200214, 7.3573644843],
    [0.00000700816, 3.91629287572, 1052.51220067191],
    [0.0000024529, 2.63485195455, 1589.3167127673],
    [0.00000301422, 4.61795245261, 14.47091148511],
    [0.0000023342, 0.22403594785, 529.9347825781],
    [0.00000141715, 4.79041763529, 529.44714761109],
    [0.00000134439, 3.36367709264, 1045.3986536711],
    [0.00000078118, 4.43004262792, 1596.43025976811],
    [0.00000076833, 5.59776741855, 117.5636857037],
    [0.00000092926, 4.40350030513, 323.74923414091],
    [0.00000078223, 5.40096869297, 110.45013870291],
    [0.00000065879, 1.48772085888, 109.9625037359],
    [0.00000058147, 4.5724962085, 508.5941415757],
    [0.00000051718, 2.58980208142, 95.7354097343],
    [0.00000058, 5.1660813763, 426.8420083595],
    [0.00000047055, 3.57438012615, 1073.85284167431],
    [0.00000041297, 2.0463499799, 633.0275567967],
    [0.00000056002, 3.01090434125, 736.1203310153],
    [0.0000004059, 1.87109726412, 942.3058794525],
    [0.00000036838, 3.19435792826, 625.9140097959],
    [0.00000032307, 2.88952809764, 551.27542358051],
    [0.00000038649, 4.33064739716, 330.8627811417],
    [0.00000031637, 4.00200479143, 1582.2031657665],
    [0.00000032315, 3.88623349757, 433.9555553603],
    [0.00000037135, 0.48127765061, 103.3365917021],
    [0.00000027869, 3.45656961616, 220.6564599223],
    [0.0000002713, 3.15454297418, 2119.00767786191],
    [0.00000027831, 1.90579303958, 949.4194264533],
    [0.00000026529, 2.7172372232, 1169.83206889211],
    [0.00000026303, 4.38890518124, 419.72846135871],
    [0.00000027724, 0.30357549024, 6.86972951729],
    [0.00000028942, 3.12933706476, 729.0067840145],
    [0.00000024801, 3.55551242105, 198.82818395289],
    [0.00000022666, 3.71310041528, 1155.6049748905],
    [0.00000022463, 0.48577882565, 956.53297345411],
    [0.00000024855, 5.09800784432, 519.63984183961],
    [0.00000017587, 4.51976917752, 21.5844584859],
    [0.00000020511, 2.33822898286, 540.2297233166],
    [0.00000017573, 3.85855374859, 205.9417309537],
    [0.00000019314, 2.63415930465, 640.1411037975],
    [0.0000001385, 5.76603142366, 853.4401992355],
    [0.00000013374, 3.35682573162, 227.77000692311],
    [0.00000012226, 4.58700933844, 522.3336006103],
    [0.00000011511, 2.47604533623, 441.06910236111],
    [0.00000011785, 4.54328580165, 412.6149143579],
    [0.00000009912, 1.34647813433, 206.42936592071],
    [0.00000009439, 4.79528119891, 618.8004627951],
    [0.00000009398, 3.2716700787, 1038.2851066703],
    [0.00000009377, 4.03210310088, 839.2131052339],
    [0.00000009606, 1.29930255542, 426.3543733925],
    [0.00000011272, 4.51307032502, 309.0345051723],
    [0.00000008495, 0.16101118987, 536.5606946119],
    [0.00000007775, 5.49067289304, 316.6356871401],
    [0.00000007402, 2.44949859869, 412.12727939089],
    [0.00000009022, 3.47982253523, 1575.08961876571],
    [0.0000000722, 4.54159743611, 1258.6977491091],
    [0.00000006726, 4.13659559768, 832.0995582331],
    [0.00000006944, 5.51093137903, 309.5221401393],
    [0.00000007778, 4.49951291514, 301.9209581715],
    [0.00000007986, 2.40170822369, 213.0552779545],
    [0.00000005933, 4.9594804235, 2126.1212248627],
    [0.00000005844, 1.7392666531, 743.23387801611],
    [0.00000005965, 3.67342955411, 515.2200536095],
    [0.00000004458, 5.51442841213, 1059.1381127057],
    [0.00000003905, 4.27184704039, 1265.81129610991],
    [0.00000004118, 5.46755234125, 124.6772327045],
    [0.00000003669, 1.84391323522, 1486.2239385487],
    [0.00000003534, 4.38721038089, 625.42637482889],
    [0.00000003134, 3.36420319845, 1699.5230339867],
    [0.00000002973, 1.04471011524, 742.74624304909],
    [0.00000002686, 5.78683992698, 88.6218627335],
    [0.00000003079, 1.99582195262, 935.19233245171],
    [0.00000002579, 3.9542992137, 1062.80714141041],
    [0.00000002378, 3.65318849817, 2648.6986429565],
    [0.00000002346, 2.14951839318, 728.5191490475],
    [0.00000003011, 2.56665773426, 647.25465079831],
    [0.00000002322, 4.05450701004, 1603.5438067689],
    [0.00000002809, 3.52093842683, 1272.9248431107],
    [0.00000002701, 2.72157216334, 1471.9968445471],
    [0.00000002369, 3.30637620547, 721.8932370137],
    [0.00000002359, 4.17347791131, 337.9763281425],
    [0.00000002423, 4.28527398429, 618.3128278281],
    [0.0000000207, 3.05132274908, 831.6119232661],
    [0.00000001958, 3.88095030867, 526.7533888404],
    [0.00000001935, 0.44518939738, 533.1161763158],
    [0.00000002297, 5.5417541058, 1368.9040703285],
    [0.00000002015, 3.6863760059, 191.7146369521],
    [0.00000002184, 4.06594004577, 963.6465204549],
    [0.00000001685, 4.73740509993, 1685.2959399851],
    [0.00000001816, 1.96798308062, 1162.7185218913],
    [0.00000001733, 2.70077445297, 750.3474250169],
    [0.00000001699, 4.10560078356, 1055.6935944096],
    [0.00000001717, 2.19034610706, 448.1826493619],
    [0.00000001811, 4.93807061086, 860.55374623631],
    [0.00000001432, 6.00290182284, 81.50831573269],
    [0.00000001779, 2.60448403761, 1056.444353935],
    [0.00000001397, 5.29190720613, 611.6869157943],
    [0.00000001563, 3.56303703117, 838.72547026689],
    [0.00000001726, 5.58280644952, 1361.79052332771],
    [0.00000001152, 0.12950397768, 1383.13116433011],
    [0.000000012, 3.69239539182, 632.5399218297],
    [0.00000001145, 5.43151272872, 405.5013673571],
    [0.00000001078, 2.03239323412, 1479.11039154791],
    [0.00000001223, 6.16550077809, 21.0968235189],
    [0.00000001051, 1.31296703432, 526.00262931501],
    [0.00000001414, 3.85675901673, 941.8182444855],
    [0.0000000103, 3.03819438792, 533.8669358412],
    [0.00000001211, 2.84309753774, 1069.92068841121],
    [0.0000000124, 3.92862477221, 934.70469748469],
    [0.00000000944, 1.86321874038, 1044.9110187041],
    [0.00000001091, 4.10316988679, 2111.8941308611],
    [0.00000000986, 5.14322625016, 2097.1794018925],
    [0.00000000967, 5.28600031012, 1588.82907780029],
    [0.00000000939, 2.81112974414, 13.9832765181],
    [0.0000000087, 5.07245340162, 639.6534688305],
    [0.00000001013, 5.44748312429, 1049.3308069342],
    [0.00000000989, 2.86838275982, 1148.00379292269],
    [0.00000001043, 2.98280277812, 1080.9663886751],
    [0.00000000824, 4.17606860247, 433.46792039329],
    [0.00000001002, 4.01347037981, 1788.38871420371],
    [0.00000000823, 2.03930536894, 654.3681977991],
    [0.00000000801, 0.27042298823, 1375.52998236229],
    [0.0000000089, 4.65790311289, 294.80741117069],
    [0.00000000763, 3.00898516277, 2421.1724535169],
    [0.00000000793, 2.96629034382, 234.8835539239],
    [0.00000000752, 4.56374445756, 1251.5842021083],
    [0.00000000788, 5.543991091, 302.40859313851],
    [0.00000000719, 3.28492821269, 1787.9010792367],
    [0.0000000076, 3.49538730713, 2104.7805838603],
    [0.00000000839, 4.84381227007, 1898.5950354231],
    [0.00000000962, 4.80560510645, 2318.0796792983],
    [0.00000000832, 4.85895718536, 2001.68780964171],
    [0.0000000093, 0.44313687441, 96.2230447013],
    [0.00000000879, 1.78320792762, 845.8390172677],
    [0.0000000078, 1.22419144371, 611.1992808273],
    [0.000000009, 4.69837586769, 1162.23088692429],
    [0.00000000759, 3.21123137459, 2008.3137216755],
    [0.00000000715, 2.43949501289, 1464.3956625793],
    [0.0000000078, 4.52983365743, 2214.98690507971],
    [0.00000000679, 1.6976798998, 2435.3995475185],
    [0.00000000809, 5.12961307681, 1994.5742626409],
    [0.00000000772, 5.46156636423, 220.16882495529],
    [0.00000000622, 2.00213930026, 316.14805217309],
    [0.00000000612, 0.83227002431, 749.8597900499],
    [0.00000000612, 1.13237645481, 117.0760507367],
    [0.00000000713, 6.02221537369, 1140.8902459219],
    [0.00000000626, 1.12243212464, 1692.40948698591],
    [0.00000000676, 3.49335420549, 2840.6570973921],
    [0.00000000594, 1.37315363305, 102.84895673509],
    [0.0000000079, 3.53118420318, 1251.0965671413],
    [0.00000000756, 4.64193430086, 1148.49142788971],
    [0.00000000568, 0.8448170713, 1141.3778808889],
    [0.00000000616, 3.74926817789, 2524.2652277355],
    [0.0000000056, 2.8913191755, 2104.2929488933],
    [0.00000000686, 4.59806378353, 2627.3580019541],
    [0.0000000072, 3.6432779202, 1258.21011414209],
    [0.00000000733, 6.11931006119, 1884.36794142151],
    [0.00000000583, 1.49952942471, 2751.79141717511],
    [0.00000000546, 5.8760359049, 543.6742416127],
    [0.0000000053, 0.65117889899, 1066.2516597065],
    [0.00000000581, 2.31120308329, 1780.78753223589],
    [0.00000000523, 3.92602863833, 1471.50920958009],
    [0.00000000508, 3.10717560112, 508.10650660869],
    [0.00000000645, 3.47859687529, 2015.9149036433],
    [0.00000000553, 5.34237729322, 852.9525642685],
    [0.0000000048, 3.0583075864, 1677.6947580173],
    [0.0000000048, 6.19990023999, 1678.1823929843],
    [0.00000000618, 3.01489314196, 1905.70858242391],
    [0.00000000463, 1.12266408736, 89.10949770051],
    [0.00000000512, 3.49738396142, 1155.1173399235],
    [0.00000000497, 3.67029546589, 1376.0176173293],
    [0.00000000529, 2.4156657098, 1802.6158082053],
    [0.00000000617, 4.5554167325, 2634.47154895491],
    [0.00000000459, 5.95987834679, 1691.9218520189],
    [0.00000000503, 0.43655200011, 948.9317914863],
    [0.00000000547, 4.87653833894, 2310.9661322975],
    [0.00000000432, 3.81824814417, 1567.48843679789],
    [0.00000000432, 3.81824814417, 1567.9760717649],
    [0.00000000419, 1.75904856409, 1361.3028883607],
    [0.00000000415, 5.93908536808, 558.3889705813],
    [0.00000000415, 4.68478558747, 501.4805945749],
    [0.00000000413, 0.31276763851, 1883.8803064545],
    [0.00000000436, 3.11437440839, 1464.8832975463],
];

const Y4: &[Term] = &[
    [0.00001739145, 1.42580386197, 537.0483295789],
    [0.00001740807, 6.00432821679, 522.8212355773],
    [0.00000593812, 3.67074805419, 529.9347825781],
    [0.00000303714, 6.1331979889, 515.70768857651],
    [0.00000216971, 1.33336714102, 544.1618765797],
    [0.00000201301, 0.66067734911, 0.2438174835],
    [0.00000128314, 2.2291902379, 1066.7392946735],
    [0.00000084519, 2.80934114497, 7.3573644843],
    [0.00000066713, 5.73808767639, 1052.51220067191],
    [0.00000050914, 2.8897041503, 14.47091148511],
    [0.00000056189, 5.95539409574, 1059.6257476727],
    [0.00000023551, 5.17496754986, 1045.3986536711],
    [0.00000014975, 0.07336624009, 508.5941415757],
    [0.0000001232, 1.1882344335, 1589.3167127673],
    [0.00000010412, 1.88156810845, 1073.85284167431],
    [0.00000010436, 2.90285964648, 1596.43025976811],
    [0.00000010171, 3.86119874481, 117.5636857037],
    [0.00000007028, 6.10496958528, 109.9625037359],
    [0.0000000731, 1.00125130523, 551.27542358051],
    [0.00000005867, 4.33407208985, 95.7354097343],
    [0.00000005482, 2.53643730082, 323.74923414091],
    [0.00000005308, 2.604142185, 330.8627811417],
    [0.00000005155, 3.5806050973, 942.3058794525],
    [0.00000004404, 4.83926930457, 729.0067840145],
    [0.00000003429, 4.99509335363, 625.9140097959],
    [0.00000003596, 3.33581032804, 110.45013870291],
    [0.00000003379, 5.25427709084, 198.82818395289],
    [0.0000000287, 2.96757411587, 529.44714761109],
    [0.00000003465, 4.76476994232, 736.1203310153],
    [0.00000002781, 5.80054865786, 1582.2031657665],
    [0.0000000271, 0.81919347445, 441.06910236111],
    [0.00000002621, 0.96453577508, 1169.83206889211],
    [0.00000002851, 2.20827145709, 103.3365917021],
    [0.00000003222, 1.76964083344, 433.9555553603],
    [0.00000002252, 5.47979006595, 1155.6049748905],
    [0.00000002643, 3.09107587932, 426.8420083595],
    [0.00000002565, 1.36437340248, 6.86972951729],
    [0.00000002154, 0.3684564302, 618.8004627951],
    [0.00000002044, 6.19291733804, 419.72846135871],
    [0.00000001513, 1.60661037744, 220.6564599223],
    [0.00000001619, 3.76198603224, 633.0275567967],
    [0.00000001503, 1.66604601675, 2119.00767786191],
    [0.00000001422, 1.64339956175, 227.77000692311],
    [0.00000001448, 5.34787531868, 1575.08961876571],
    [0.00000001354, 5.08770092894, 956.53297345411],
    [0.00000001398, 6.23305755326, 301.9209581715],
    [0.00000001551, 0.94639398642, 640.1411037975],
    [0.00000001193, 4.1201067332, 853.4401992355],
    [0.00000001228, 4.89609039918, 536.5606946119],
    [0.00000001153, 5.81136535588, 426.3543733925],
    [0.00000001111, 0.25913441118, 309.5221401393],
    [0.00000001322, 6.23999851102, 412.6149143579],
    [0.00000001137, 0.06266558324, 1258.6977491091],
    [0.00000000987, 0.30137359463, 522.3336006103],
    [0.00000000937, 2.8331177833, 618.3128278281],
    [0.0000000083, 4.12976646136, 412.12727939089],
    [0.00000000868, 5.39178303584, 1038.2851066703],
    [0.00000000819, 2.43009257653, 742.74624304909],
    [0.00000000952, 1.65716723019, 831.6119232661],
    [0.00000000903, 3.71462655064, 949.4194264533],
    [0.0000000074, 5.82657968137, 832.0995582331],
    [0.00000000726, 5.81781448666, 839.2131052339],
    [0.0000000089, 1.13102640201, 647.25465079831],
    [0.00000000672, 5.39661133415, 102.84895673509],
    [0.00000000598, 2.46149662725, 337.9763281425],
    [0.00000000711, 5.36999317897, 515.2200536095],
    [0.00000000557, 0.72441048007, 1486.2239385487],
    [0.00000000506, 3.86590138433, 1059.1381127057],
    [0.00000000464, 2.90086100642, 117.0760507367],
    [0.00000000479, 4.66931827522, 526.7533888404],
    [0.00000000451, 5.3282051882, 1471.9968445471],
    [0.00000000466, 5.95847666696, 533.1161763158],
    [0.00000000396, 2.33304510363, 1603.5438067689],
];

const Y5: &[Term] = &[
    [0.00000131509, 5.80959663173, 537.0483295789],
    [0.00000126839, 1.5748639568, 522.8212355773],
    [0.00000048033, 1.61168112243, 515.70768857651],
    [0.00000034241, 5.82558762592, 544.1618765797],
    [0.00000011284, 0.5680310374, 1066.7392946735],
    [0.00000005229, 0.87528666787, 0.2438174835],
    [0.00000003712, 1.71517319353, 1052.51220067191],
    [0.00000004457, 3.71675991204, 529.9347825781],
    [0.00000001949, 0.16900749445, 1073.85284167431],
    [0.00000001738, 3.42162831595, 1059.6257476727],
    [0.00000001716, 1.487673231, 1045.3986536711],
    [0.00000000879, 1.64959635605, 508.5941415757],
    [0.00000000886, 2.65648931803, 551.27542358051],
    [0.00000000665, 0.00022824942, 7.3573644843],
    [0.00000000466, 1.28798211401, 1596.43025976811],
];

const Z0: &[Term] = &[
    [0.11823100489, 3.55844646343, 529.6909650946],
    [0.00859031952, 0.0, 0.0],
    [0.00286562094, 3.90812238338, 1059.3819301892],
    [0.00042388592, 3.60144191032, 522.5774180938],
    [0.00033295491, 0.30297050585, 536.8045120954],
    [0.0001041616, 4.25764593061, 1589.0728952838],
    [0.00007449294, 5.2421310415, 103.0927742186],
    [0.00006910102, 1.75032945752, 7.1135470008],
    [0.00005292012, 1.68231447192, 426.598190876],
    [0.00004313598, 3.70673689841, 213.299095438],
    [0.00003784265, 2.71522544491, 110.2063212194],
    [0.00003798016, 2.16715743175, 632.7837393132],
    [0.00002455385, 2.96904135659, 1052.2683831884],
    [0.00002461547, 2.99889460411, 1162.4747044078],
    [0.00002001451, 2.68535838309, 419.4846438752],
    [0.00002163471, 6.26718259854, 846.0828347512],
    [0.00001633653, 0.64194743493, 1066.49547719],
    [0.00001450672, 1.17108416193, 949.1756089698],
    [0.00000693095, 5.14278041161, 316.3918696566],
    [0.00000715042, 1.4121119782, 323.5054166574],
    [0.0000054972, 4.84164274378, 742.9900605326],
    [0.00000447831, 4.60746588621, 2118.7638603784],
    [0.00000543619, 3.69636561822, 515.463871093],
    [0.00000483852, 4.7179611016, 735.8765135318],
    [0.000003651, 6.06065925437, 206.1855484372],
    [0.0000028898, 0.4026629309, 525.7588118315],
    [0.00000254938, 0.17978560944, 543.9180590962],
    [0.00000195137, 3.35374802237, 1692.1656695024],
    [0.00000253254, 3.57485315487, 533.6231183577],
    [0.00000196691, 2.65526923569, 956.2891559706],
    [0.00000154379, 1.4705066947, 625.6701923124],
    [0.00000145972, 5.96112903396, 838.9692877504],
    [0.00000162371, 3.12160596807, 1581.959348283],
    [0.00000135954, 2.2372160061, 1478.8665740644],
    [0.00000135376, 4.03180075278, 1265.5674786264],
    [0.00000118734, 6.19132554294, 532.8723588323],
    [0.00000121147, 4.06252466827, 526.5095713569],
    [0.00000113963, 0.34443034869, 1375.7737998458],
    [0.00000133095, 1.6128364808, 14.2270940016],
    [0.00000089416, 0.98707919437, 1596.1864422846],
    [0.00000091948, 5.29521569721, 95.9792272178],
    [0.00000071808, 2.60370257221, 117.3198682202],
    [0.00000063527, 0.97603653343, 433.7117378768],
    [0.00000064121, 4.6352439167, 1368.660252845],
    [0.00000059116, 0.4203856617, 220.4126424388],
    [0.00000060054, 1.05875226211, 942.062061969],
    [0.00000054868, 6.14868344705, 1169.5882514086],
    [0.00000047058, 2.39069042869, 853.196381752],
    [0.00000056617, 5.7864478694, 639.897286314],
    [0.00000041028, 5.07649815801, 309.2783226558],
    [0.0000005498, 2.72414041857, 1045.1548361876],
    [0.00000039937, 2.6301496292, 380.12776796],
    [0.00000034887, 3.06644858707, 412.3710968744],
    [0.00000033112, 2.21084011524, 74.7815985673],
    [0.00000024753, 4.09311535367, 527.2432845398],
    [0.00000021473, 5.68324848411, 1272.6810256272],
    [0.00000021259, 4.15648418623, 1685.0521225016],
    [0.00000021214, 4.95749714252, 2648.454825473],
    [0.00000019531, 3.58685387193, 529.7391492044],
    [0.00000024578, 6.16442414965, 532.1386456494],
    [0.00000021217, 4.46071227915, 1155.361157407],
    [0.00000021279, 3.98105217713, 1795.258443721],
    [0.00000019533, 0.38904271302, 529.6427809848],
    [0.0000001957, 4.37171598624, 149.5631971346],
    [0.00000019447, 1.27663598466, 330.6189636582],
    [0.0000001544, 0.7226002714, 530.6541729411],
    [0.00000014562, 5.50135998822, 1471.7530270636],
    [0.00000017624, 1.31667827871, 3.9321532631],
    [0.00000013309, 2.77897533854, 2008.557539159],
    [0.00000013206, 3.64976502017, 2221.856634597],
    [0.00000013142, 0.72687086889, 1055.4497769261],
    [0.00000015413, 4.31958059396, 1063.3140834523],
    [0.00000014193, 3.67387943991, 2111.6503133776],
    [0.00000012996, 1.31000927869, 453.424893819],
    [0.00000011738, 6.14331082365, 199.0720014364],
    [0.00000015482, 3.25291782438, 528.7277572481],
    [0.00000010389, 0.5137822898, 1073.6090241908],
    [0.0000001299, 1.87234255615, 984.6003316219],
    [0.0000001228, 1.99030236725, 38.1330356378],
    [0.00000010473, 0.26689008608, 10213.285546211],
    [0.00000008875, 0.13793367408, 305.3461693927],
    [0.00000007692, 5.08407965373, 1788.1448967202],
    [0.00000007861, 3.79832245754, 76.2660712756],
    [0.00000008714, 1.58825029218, 3.1813937377],
    [0.00000007143, 4.01912438773, 2001.4439921582],
    [0.00000006752, 5.50960892986, 1898.3512179396],
    [0.00000007441, 1.30439352743, 618.5566453116],
    [0.00000006896, 1.74025919863, 529.1697002328],
    [0.00000007365, 3.26347830221, 1485.9801210652],
    [0.00000006518, 0.90320354569, 1905.4647649404],
    [0.00000008347, 5.96531853825, 909.8187330546],
    [0.00000007728, 4.61604781975, 728.762966531],
    [0.00000006887, 2.23549334986, 530.2122299564],
    [0.00000005783, 6.02338915633, 831.8557407496],
    [0.00000005788, 0.26042181508, 1062.5633239269],
    [0.00000005581, 6.17489228666, 1258.4539316256],
    [0.00000005154, 1.33592252764, 2125.8774073792],
    [0.00000004916, 0.18728472832, 1699.2792165032],
    [0.0000000548, 3.12818768952, 604.4725636619],
    [0.00000004967, 3.92882210242, 508.3503240922],
    [0.00000004994, 0.03902921434, 1439.5096981492],
    [0.00000005269, 4.06576160798, 1056.2005364515],
    [0.00000004711, 0.87975326503, 490.3340891794],
    [0.00000004221, 2.57304081485, 99.1606209555],
    [0.00000004005, 2.96062737592, 526.7702037878],
    [0.00000003959, 1.38163787157, 532.6117264014],
    [0.00000004844, 1.47818569722, 454.9093665273],
    [0.00000003683, 0.33555577415, 528.9402055692],
    [0.00000003681, 4.00539820601, 530.44172462],
    [0.00000003623, 0.2867435733, 227.5261894396],
    [0.00000004295, 3.45202038167, 569.0478410098],
    [0.00000003458, 4.40401766789, 519.3960243561],
    [0.00000003435, 5.34191505443, 11.0457002639],
    [0.00000003355, 4.80063248866, 2104.5367663768],
    [0.00000003535, 1.18645749024, 525.4981794006],
    [0.00000003477, 3.15607509055, 533.8837507886],
    [0.00000003219, 5.37130793285, 2214.7430875962],
    [0.00000004358, 2.16300555603, 1021.2488945514],
    [0.00000003334, 0.3864077245, 224.3447957019],
    [0.00000002697, 6.22459411775, 539.9859058331],
    [0.00000003143, 0.15836271478, 750.1036075334],
    [0.00000002649, 3.80434469443, 2317.8358618148],
    [0.00000002856, 0.29274516197, 983.1158589136],
    [0.00000003424, 5.16456871383, 1.4844727083],
    [0.00000002725, 0.64710955846, 524.0618908021],
    [0.00000002623, 0.25280896703, 551.031606097],
    [0.00000002685, 3.69478866795, 535.3200393871],
    [0.00000002939, 0.64629595693, 540.7366653585],
    [0.00000002398, 4.36615854926, 2428.0421830342],
    [0.00000002597, 1.15824869762, 963.4027029714],
    [0.00000002769, 0.20040217534, 525.0250986486],
    [0.00000002336, 3.71676131146, 529.851023789],
    [0.00000002336, 0.62392433691, 529.5309064002],
    [0.00000002491, 2.84297287947, 1382.8873468466],
    [0.00000002598, 4.13924061941, 534.3568315406],
    [0.00000002747, 1.76471074936, 524.2743391232],
    [0.00000002475, 0.99313692673, 934.9485149682],
    [0.00000002704, 2.57406093768, 535.107591066],
    [0.00000002302, 5.84295144929, 1148.2476104062],
    [0.00000002068, 5.96196623799, 440.8252848776],
    [0.00000002012, 4.95946680265, 1361.5467058442],
    [0.00000001987, 0.18375525793, 1802.3719907218],
    [0.00000001934, 2.82066156035, 835.0371344873],
    [0.00000002147, 5.96724060411, 1891.2376709388],
    [0.0000000194, 3.63687343812, 2324.9494088156],
    [0.00000001763, 2.57382733259, 415.5524906121],
    [0.0000000186, 5.24230405559, 2531.1349572528],
    [0.00000001707, 5.38883058569, 302.164775655],
    [0.00000002152, 1.7455744422, 21.3406410024],
    [0.00000001613, 3.45966511571, 529.4785167735],
    [0.00000001613, 0.88102053266, 529.9034134157],
    [0.00000002134, 2.79657990895, 35.4247226521],
    [0.00000001593, 1.37312370449, 1574.8458012822],
    [0.0000000151, 3.41611736454, 518.6452648307],
    [0.00000001579, 3.96836848379, 2420.9286360334],
    [0.0000000163, 1.31973482281, 39.3568759152],
    [0.00000001598, 2.53043088824, 511.5317178299],
    [0.00000001841, 5.72475961436, 531.1754378029],
    [0.00000001537, 1.84394223501, 547.8502123593],
    [0.00000001771, 4.87234280655, 528.2064923863],
    [0.00000001656, 1.27834742762, 173.9422195228],
    [0.00000001242, 1.65064670901, 643.8294395771],
    [0.00000001302, 3.54050271463, 3340.6124266998],
    [0.00000001236, 5.41985106155, 107.0249274817],
    [0.00000001165, 1.48429677606, 960.2213092337],
    [0.00000001166, 5.12888892088, 1048.3362299253],
    [0.00000001153, 4.78828764413, 514.7131115676],
    [0.00000001153, 4.22743390789, 2744.4340526908],
    [0.00000001478, 3.73912254261, 230.5645708254],
    [0.00000001121, 6.27688038656, 387.2413149608],
    [0.00000001112, 5.83569926578, 544.6688186216],
    [0.0000000117, 1.05508911315, 1512.8068240082],
    [0.00000001113, 5.74217831509, 3480.3105662226],
    [0.00000001507, 4.16985097397, 1364.7280995819],
    [0.0000000112, 5.02238271412, 1464.6394800628],
    [0.00000001232, 2.83088412944, 2538.2485042536],
    [0.00000001179, 4.62538441124, 1056.9342496344],
    [0.00000001278, 3.86396842379, 92.0470739547],
    [0.00000001094, 2.73378417498, 299.1263942692],
    [0.00000001345, 0.63863230611, 1061.829610744],
    [0.00000000977, 3.50831165685, 2.4476805548],
    [0.00000001323, 4.03638019689, 494.2662424425],
    [0.0000000131, 5.4545826458, 1057.8974574809],
    [0.00000000966, 3.51363341772, 2634.2277314714],
    [0.00000001053, 5.4939412292, 3178.1457905676],
    [0.00000000984, 4.22960042766, 430.5303441391],
    [0.00000000937, 3.77590974564, 2641.3412784722],
    [0.00000000932, 4.11879245377, 1059.430114299],
    [0.00000000941, 0.30660455816, 70.8494453042],
    [0.00000000925, 1.2909178547, 2435.155730035],
    [0.0000000095, 3.88567620136, 3377.217792004],
    [0.00000001051, 5.62777473038, 2207.6295405954],
    [0.0000000102, 1.775206255, 312.4597163935],
    [0.00000000946, 4.13718116942, 1677.9385755008],
    [0.0000000108, 2.32932073464, 106.2741679563],
    [0.0000000089, 0.0358289558, 647.0108333148],
    [0.00000001086, 2.80157071056, 1038.0412891868],
    [0.00000001158, 0.3249963054, 565.1156877467],
    [0.00000001098, 1.00937080256, 523.5406259403],
    [0.00000000932, 0.92098132614, 1059.3337460794],
    [0.00000000821, 3.41471589329, 2950.619601128],
    [0.00000000929, 2.30521635468, 1514.2912967165],
    [0.00000000915, 1.48306891526, 10.2949407385],
    [0.00000000911, 3.32547809355, 18.1592472647],
    [0.00000000786, 2.82286526802, 1134.1635287565],
    [0.00000000954, 0.13401891198, 3906.9087570986],
    [0.00000000994, 3.3315928375, 535.8413042489],
    [0.00000000792, 5.10203109941, 2524.021410252],
    [0.00000000824, 1.7447274873, 529.9515975255],
    [0.00000000824, 2.59595816107, 529.4303326637],
    [0.00000000762, 4.30564108086, 672.1406152284],
    [0.00000000872, 5.03498959444, 679.2541622292],
    [0.00000000839, 3.34536065236, 124.433415221],
    [0.00000000927, 4.91765336511, 1593.0050485469],
    [0.00000000826, 5.05738343335, 2847.5268269094],
    [0.00000000738, 0.70435921398, 522.529233984],
];

const Z1: &[Term] = &[
    [0.00922338114, 5.70129376981, 529.6909650946],
    [0.00016158151, 5.47088355549, 522.5774180938],
    [0.00011443757, 4.73284385916, 536.8045120954],
    [0.00013239917, PI, 0.0],
    [0.00008389696, 5.77702424773, 1059.3819301892],
    [0.0000151838, 6.17585226995, 7.1135470008],
    [0.00000909709, 4.72812859336, 1052.2683831884],
    [0.00000620246, 2.72253251427, 103.0927742186],
    [0.00000608445, 5.18778213162, 1066.49547719],
    [0.00000532577, 3.42162653671, 632.7837393132],
    [0.0000038099, 0.66271432082, 419.4846438752],
    [0.00000388254, 5.49417723877, 515.463871093],
    [0.00000298589, 2.90253153613, 949.1756089698],
    [0.00000349922, 0.54665309808, 110.2063212194],
    [0.00000279305, 3.88961739871, 1589.0728952838],
    [0.00000361932, 5.53643296927, 213.299095438],
    [0.00000225182, 3.89570879874, 735.8765135318],
    [0.00000187607, 4.69299591719, 543.9180590962],
    [0.00000179235, 5.12740491355, 1162.4747044078],
    [0.00000200039, 6.12017192088, 316.3918696566],
    [0.00000182523, 1.80179763504, 846.0828347512],
    [0.00000144548, 5.86543306509, 323.5054166574],
    [0.00000086282, 5.89687025782, 526.5095713569],
    [0.00000089546, 5.6529676552, 533.6231183577],
    [0.00000081378, 6.14717900879, 14.2270940016],
    [0.00000074353, 2.14164008505, 206.1855484372],
    [0.00000069673, 4.30083628252, 532.8723588323],
    [0.00000062471, 4.30070044341, 525.7588118315],
    [0.00000057223, 1.37578902299, 426.598190876],
    [0.00000053295, 4.89194899977, 1581.959348283],
    [0.00000040084, 3.7614148524, 625.6701923124],
    [0.00000036247, 5.63125611734, 1596.1864422846],
    [0.00000035548, 1.83858046513, 956.2891559706],
    [0.0000004134, 4.43813420705, 1045.1548361876],
    [0.00000031563, 0.93258298806, 95.9792272178],
    [0.00000033208, 0.84342977892, 117.3198682202],
    [0.00000030354, 3.48783919024, 639.897286314],
    [0.00000030115, 5.67382431748, 1265.5674786264],
    [0.00000025977, 2.95191149293, 942.062061969],
    [0.00000033745, 3.93467189724, 2118.7638603784],
    [0.00000022626, 5.48825527865, 433.7117378768],
    [0.00000019878, 4.91628562475, 220.4126424388],
    [0.00000017659, 4.23943297681, 1169.5882514086],
    [0.00000018816, 4.88638541834, 1155.361157407],
    [0.0000001371, 0.75869975183, 853.196381752],
    [0.00000011629, 5.82902179758, 330.6189636582],
    [0.00000009953, 3.77150415749, 1478.8665740644],
    [0.00000009435, 5.19056014088, 412.3710968744],
    [0.00000007949, 5.09235140984, 1073.6090241908],
    [0.00000007394, 3.77882877747, 742.9900605326],
    [0.00000006394, 1.73926334857, 199.0720014364],
    [0.00000007268, 1.08212079652, 309.2783226558],
    [0.00000006126, 5.65302722173, 508.3503240922],
    [0.00000005709, 5.24271332802, 1692.1656695024],
    [0.00000004446, 0.13248846755, 1063.3140834523],
    [0.00000004664, 6.01570799148, 1795.258443721],
    [0.00000004631, 2.23071927945, 1368.660252845],
    [0.00000005404, 4.55754877469, 728.762966531],
    [0.00000003944, 6.15098833747, 519.3960243561],
    [0.00000004113, 6.19598758673, 3.1813937377],
    [0.00000003543, 3.09506092197, 618.5566453116],
    [0.00000003392, 1.77987055903, 1375.7737998458],
    [0.00000003322, 4.96703910975, 1062.5633239269],
    [0.00000003774, 5.36462989641, 2111.6503133776],
    [0.00000003799, 5.83406327157, 1056.2005364515],
    [0.00000002813, 4.52082617477, 1272.6810256272],
    [0.00000002782, 4.7975466268, 551.031606097],
    [0.00000002602, 4.23853778386, 1574.8458012822],
    [0.00000002563, 4.89379767599, 227.5261894396],
    [0.00000002684, 4.2137935859, 2648.454825473],
    [0.00000002532, 4.43605994513, 539.9859058331],
    [0.00000002233, 3.23226667541, 1685.0521225016],
    [0.00000002724, 4.04040213922, 74.7815985673],
    [0.00000002366, 4.85623283641, 1055.4497769261],
    [0.00000002278, 2.57618076227, 1485.9801210652],
    [0.0000000208, 0.06312365899, 2125.8774073792],
    [0.0000000246, 1.72405831407, 532.1386456494],
    [0.00000001956, 2.23190744786, 529.6427809848],
    [0.00000001955, 5.42971857629, 529.7391492044],
    [0.00000002026, 1.92698506631, 525.0250986486],
    [0.0000000182, 6.00083773693, 1258.4539316256],
    [0.00000002478, 5.93625415892, 527.2432845398],
    [0.00000001744, 4.12331874845, 440.8252848776],
    [0.00000002234, 0.54491713117, 380.12776796],
    [0.00000002181, 6.14968267326, 149.5631971346],
    [0.00000001629, 4.73547025109, 1699.2792165032],
    [0.00000001576, 5.79923230523, 838.9692877504],
    [0.00000001718, 1.47385390454, 831.8557407496],
    [0.00000002078, 0.02343346752, 21.3406410024],
    [0.00000001415, 6.10139082852, 2428.0421830342],
    [0.00000001549, 5.09589374634, 528.7277572481],
    [0.00000001415, 2.3534696034, 534.3568315406],
    [0.00000001305, 2.13001780938, 302.164775655],
    [0.00000001546, 2.56584512211, 530.6541729411],
    [0.00000001225, 4.81644489422, 535.107591066],
    [0.00000001227, 4.63162956792, 526.7702037878],
    [0.00000001475, 3.64456015927, 984.6003316219],
    [0.00000001121, 3.02317463559, 2001.4439921582],
    [0.00000001035, 3.65466665401, 1471.7530270636],
    [0.00000001161, 4.51697446536, 1038.0412891868],
    [0.0000000106, 3.43347467903, 3.9321532631],
    [0.00000001007, 4.35426216497, 511.5317178299],
    [0.00000001025, 2.87748450885, 2317.8358618148],
    [0.00000001112, 4.4722339961, 750.1036075334],
    [0.00000001226, 3.74723115522, 38.1330356378],
    [0.00000000876, 5.40141749419, 524.2743391232],
    [0.00000000809, 1.79288461783, 2214.7430875962],
    [0.00000000788, 5.94278119191, 10.2949407385],
    [0.00000000931, 1.41779899532, 909.8187330546],
    [0.00000000741, 1.37687026697, 1382.8873468466],
    [0.0000000067, 6.15206333598, 547.8502123593],
    [0.00000000688, 1.04145468936, 1905.4647649404],
    [0.00000000757, 5.6659303844, 76.2660712756],
    [0.00000000882, 4.49029761988, 604.4725636619],
    [0.0000000069, 3.49297492409, 529.1697002328],
    [0.00000000689, 3.98820790955, 530.2122299564],
    [0.00000000819, 2.95686029502, 454.9093665273],
    [0.0000000057, 1.96990183237, 1898.3512179396],
    [0.0000000069, 0.18267926862, 6283.0758499914],
    [0.00000000663, 4.55436664519, 305.3461693927],
    [0.00000000477, 2.44863388631, 490.3340891794],
    [0.00000000398, 4.50217443276, 2008.557539159],
    [0.00000000375, 1.90578907085, 528.9402055692],
    [0.00000000374, 5.57619428876, 530.44172462],
];

const Z2: &[Term] = &[
    [0.00042203037, 1.45965899387, 529.6909650946],
    [0.00006345355, PI, 0.0],
    [0.00003895469, 0.95407663893, 522.5774180938],
    [0.00002065004, 2.8981759066, 536.8045120954],
    [0.00000893912, 1.44537531474, 1059.3819301892],
    [0.00000193882, 0.40346918252, 1052.2683831884],
    [0.00000177093, 4.24934061763, 7.1135470008],
    [0.00000154339, 0.98627236886, 515.463871093],
    [0.00000119867, 3.48023127478, 1066.49547719],
    [0.00000071483, 2.91929643864, 543.9180590962],
    [0.00000058309, 5.21153342767, 632.7837393132],
    [0.00000049489, 1.90363556247, 1589.0728952838],
    [0.00000033191, 4.84947257364, 949.1756089698],
    [0.00000028865, 4.59812610654, 110.2063212194],
    [0.00000026279, 1.43562959449, 526.5095713569],
    [0.00000025332, 4.38538322886, 14.2270940016],
    [0.00000017862, 1.38653335267, 533.6231183577],
    [0.00000016652, 2.14142688267, 316.3918696566],
    [0.00000018475, 0.4476851131, 419.4846438752],
    [0.00000015818, 1.42318045904, 103.0927742186],
    [0.00000020087, 6.06937699639, 735.8765135318],
    [0.00000015944, 3.98909127597, 323.5054166574],
    [0.00000016057, 6.20772505653, 1045.1548361876],
    [0.00000012863, 4.0088438404, 426.598190876],
    [0.00000015906, 2.39783235711, 532.8723588323],
    [0.00000013892, 0.94813323601, 213.299095438],
    [0.00000010214, 0.99254309899, 1162.4747044078],
    [0.00000010216, 0.51784128572, 1581.959348283],
    [0.00000007926, 4.0090119384, 1596.1864422846],
    [0.00000007954, 3.77963260387, 846.0828347512],
    [0.00000009013, 2.24077766707, 525.7588118315],
    [0.00000009087, 5.73971133695, 625.6701923124],
    [0.00000006668, 4.76731608799, 942.062061969],
    [0.00000006568, 2.86210728523, 95.9792272178],
    [0.0000000786, 5.36569633982, 117.3198682202],
    [0.00000006892, 4.2340108625, 206.1855484372],
    [0.0000000509, 0.36658695963, 1155.361157407],
    [0.00000004274, 3.7288858014, 433.7117378768],
    [0.00000003753, 3.16074830315, 220.4126424388],
    [0.00000003669, 0.0772172139, 956.2891559706],
    [0.00000003591, 1.27574344579, 508.3503240922],
    [0.00000003432, 5.1249417525, 742.9900605326],
    [0.00000003262, 1.85564958119, 639.897286314],
    [0.00000003246, 2.42226150944, 1169.5882514086],
    [0.00000003879, 2.47671375339, 2118.7638603784],
    [0.00000002719, 3.57668078721, 1073.6090241908],
    [0.00000003564, 6.14378298704, 728.762966531],
    [0.0000000263, 1.72012208968, 1265.5674786264],
    [0.000000028, 4.30633268838, 330.6189636582],
    [0.00000002361, 5.36600615712, 853.196381752],
    [0.00000002261, 1.65056479007, 519.3960243561],
    [0.00000002143, 3.59903064599, 199.0720014364],
    [0.00000002064, 0.72183122308, 838.9692877504],
    [0.00000002327, 1.57523321082, 412.3710968744],
    [0.00000001483, 5.22462726605, 1478.8665740644],
    [0.00000001392, 3.02125335643, 551.031606097],
    [0.00000001187, 1.24411330169, 1258.4539316256],
    [0.00000001238, 2.56643737684, 539.9859058331],
    [0.00000001019, 4.56433477067, 21.3406410024],
    [0.00000000787, 3.45332815915, 227.5261894396],
    [0.00000000789, 4.40210167179, 3.1813937377],
    [0.00000000933, 2.99359495481, 309.2783226558],
    [0.00000000668, 2.62794838154, 440.8252848776],
    [0.00000000701, 3.25895071673, 1062.5633239269],
    [0.00000000655, 2.81138161833, 1485.9801210652],
    [0.0000000053, 1.07172768238, 1692.1656695024],
    [0.00000000491, 1.99562035757, 1368.660252845],
    [0.0000000047, 0.26830712431, 1272.6810256272],
];

const Z3: &[Term] = &[
    [0.00001302949, 3.3830750529, 529.6909650946],
    [0.00000638849, 2.73076320051, 522.5774180938],
    [0.00000252188, 1.03735897029, 536.8045120954],
    [0.00000042424, 2.76335793506, 515.463871093],
    [0.00000028787, 2.30679311994, 1052.2683831884],
    [0.00000018636, 1.12686228293, 543.9180590962],
    [0.00000016037, 1.78194169646, 1066.49547719],
    [0.00000021893, PI, 0.0],
    [0.0000001501, 2.24882166949, 7.1135470008],
    [0.0000001877, 4.26444493597, 1059.3819301892],
    [0.00000005506, 2.63836917983, 14.2270940016],
    [0.00000004515, 1.81963459999, 1045.1548361876],
    [0.00000004499, 0.43487771424, 632.7837393132],
    [0.0000000315, 2.90272527852, 110.2063212194],
    [0.00000002649, 3.67990759642, 419.4846438752],
    [0.00000002448, 5.72936768843, 103.0927742186],
    [0.00000003025, 1.52033973511, 735.8765135318],
    [0.00000002257, 0.17284429054, 949.1756089698],
    [0.00000002354, 3.18232334886, 526.5095713569],
    [0.00000001614, 2.98017326384, 508.3503240922],
    [0.00000001671, 4.40642025933, 532.8723588323],
    [0.00000001483, 1.64073529408, 625.6701923124],
    [0.00000001665, 0.44117653607, 1589.0728952838],
    [0.00000001469, 3.11087801399, 533.6231183577],
    [0.00000001412, 0.267610699, 942.062061969],
    [0.0000000127, 0.70083660931, 426.598190876],
    [0.00000000899, 2.62337071525, 1596.1864422846],
    [0.00000000951, 4.34670868038, 525.7588118315],
    [0.00000000973, 6.07278030998, 639.897286314],
    [0.00000000829, 2.20068062832, 1581.959348283],
    [0.00000001015, 3.67348757646, 117.3198682202],
    [0.00000000849, 1.53481384034, 323.5054166574],
    [0.00000000681, 1.96048278513, 1073.6090241908],
    [0.00000000665, 3.82697658502, 316.3918696566],
    [0.00000000609, 4.70141431381, 95.9792272178],
    [0.00000000518, 4.61207781194, 2118.7638603784],
    [0.00000000512, 5.55216613299, 433.7117378768],
    [0.00000000459, 3.26874502411, 213.299095438],
    [0.00000000401, 2.2767116816, 1162.4747044078],
];

const Z4: &[Term] = &[
    [0.00000078889, 4.52764322985, 522.5774180938],
    [0.00000028644, 4.45318845059, 529.6909650946],
    [0.00000026536, 0.0, 0.0],
    [0.00000023071, 5.44321158713, 536.8045120954],
    [0.00000009686, 4.52165553359, 515.463871093],
    [0.00000003848, 5.59513666444, 543.9180590962],
    [0.0000000362, 4.19174561337, 1052.2683831884],
    [0.00000000945, 5.96517767658, 7.1135470008],
    [0.00000000957, 6.25072054635, 1066.49547719],
    [0.00000000722, 3.64496080495, 1059.3819301892],
    [0.00000000582, 1.16718383135, 14.2270940016],
];

pub static JUPITER: Vsop87Table = Vsop87Table {
    variables: Variables::Rectangular,
    reference: Reference::EclipticOfDate,
    series: [
        &[X0, X1, X2, X3, X4, X5],
        &[Y0, Y1, Y2, Y3, Y4, Y5],
        &[Z0, Z1, Z2, Z3, Z4],
    ],
};
