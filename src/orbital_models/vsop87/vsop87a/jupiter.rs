//! VSOP87A series for Jupiter: heliocentric X, Y, Z on the ecliptic and equinox J2000.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const X0: &[Term] = &[
    [5.19663470114, 0.59945082355, 529.6909650946],
    [0.3666264232, PI, 0.0],
    [0.12593937922, 0.94911583701, 1059.3819301892],
    [0.01500672056, 0.7317513461, 522.5774180938],
    [0.01476224578, 3.61736921122, 536.8045120954],
    [0.00457752736, 1.29883700755, 1589.0728952838],
    [0.00301689798, 5.17372551148, 7.1135470008],
    [0.00385975375, 2.01229910687, 103.0927742186],
    [0.00194025405, 5.02580363996, 426.598190876],
    [0.00150678793, 6.12003027739, 110.2063212194],
    [0.00144867641, 5.5598057708, 632.7837393132],
    [0.00134226996, 0.87648567011, 213.299095438],
    [0.00103494641, 6.1932476912, 1052.2683831884],
    [0.00114201562, 0.01567084269, 1162.4747044078],
    [0.00072095575, 3.96117430643, 1066.49547719],
    [0.00059486083, 4.45769374358, 949.1756089698],
    [0.00068284021, 3.44051122631, 846.0828347512],
    [0.00047092251, 1.44612636451, 419.4846438752],
    [0.00030623417, 2.99132321427, 206.1855484372],
    [0.00026613459, 4.85169906494, 323.5054166574],
    [0.00019727457, 1.64891626213, 2118.7638603784],
    [0.00016481594, 1.95150056568, 316.3918696566],
    [0.00016101974, 0.8797315598, 515.463871093],
    [0.00014209487, 2.07769621413, 742.9900605326],
    [0.00015192516, 6.25820127906, 735.8765135318],
    [0.00011423199, 3.48146108929, 543.9180590962],
    [0.00012155285, 3.75229924999, 525.7588118315],
    [0.00011996271, 0.58568573729, 533.6231183577],
    [0.00008468556, 3.47248751739, 639.897286314],
    [0.00008223302, 5.56680447143, 1478.8665740644],
    [0.00008694124, 0.38262009411, 1692.1656695024],
    [0.00007427517, 5.98380751196, 956.2891559706],
    [0.0000751647, 0.92896448412, 1265.5674786264],
    [0.00007655867, 0.14178789086, 1581.959348283],
    [0.00005318791, 1.10494016349, 526.5095713569],
    [0.00005218492, 3.23235129224, 532.8723588323],
    [0.00005777311, 5.03726165628, 14.2270940016],
    [0.00004622685, 3.75817086099, 1375.7737998458],
    [0.00003939864, 4.30892687511, 1596.1864422846],
    [0.00004569444, 2.1508728171, 95.9792272178],
    [0.00002952712, 3.85988483947, 309.2783226558],
    [0.00002857935, 6.01118473739, 117.3198682202],
    [0.00002440094, 4.23995765702, 433.7117378768],
    [0.00002438257, 3.88808463822, 220.4126424388],
    [0.00002675112, 3.18723449094, 1169.5882514086],
    [0.00002386425, 5.96354994324, 1045.1548361876],
    [0.00001870097, 0.52019313301, 1155.361157407],
    [0.0000193906, 5.91883412864, 625.6701923124],
    [0.000016315, 4.41910383466, 942.062061969],
    [0.00001451667, 5.7611270604, 853.196381752],
    [0.00001361286, 1.34792748837, 1368.660252845],
    [0.00001663331, 1.94010629194, 838.9692877504],
    [0.00001611229, 5.49324974845, 74.7815985673],
    [0.0000103357, 0.08907208789, 1795.258443721],
    [0.00000991481, 3.08609505814, 1272.6810256272],
    [0.00000934789, 3.11151341633, 199.0720014364],
    [0.00000934504, 1.99938801336, 2648.454825473],
    [0.00000858829, 3.71316879557, 529.6427809848],
    [0.00000858734, 0.6277946469, 529.7391492044],
    [0.00001088284, 1.1340610419, 527.2432845398],
    [0.00001080643, 3.20528362573, 532.1386456494],
    [0.00000959188, 1.3478949421, 149.5631971346],
    [0.00000840045, 4.14390924077, 3.9321532631],
    [0.00000941997, 1.57612902656, 412.3710968744],
    [0.000009326, 5.34596782982, 380.12776796],
    [0.00000665711, 6.08446262481, 2008.557539159],
    [0.00000747735, 4.70954561325, 330.6189636582],
    [0.00000693311, 1.3375428932, 1063.3140834523],
    [0.00000606761, 0.11410967423, 2111.6503133776],
    [0.00000680707, 0.29377240207, 528.7277572481],
    [0.00000678819, 4.04669903131, 530.6541729411],
    [0.00000572943, 0.7431266377, 2221.856634597],
    [0.00000564304, 4.06331341841, 1055.4497769261],
    [0.00000647982, 5.12508099382, 984.6003316219],
    [0.00000460191, 3.82640277755, 1073.6090241908],
    [0.00000537627, 0.67272668191, 1685.0521225016],
    [0.00000508303, 6.24505797644, 728.762966531],
    [0.0000053958, 5.31458333755, 38.1330356378],
    [0.00000405304, 2.98797353644, 909.8187330546],
    [0.00000303114, 4.07249746397, 1905.4647649404],
    [0.0000041331, 4.52689012732, 454.9093665273],
    [0.00000334675, 0.95326265644, 76.2660712756],
    [0.0000038947, 6.05999515231, 604.4725636619],
    [0.00000277679, 0.65883071471, 1485.9801210652],
    [0.00000303217, 5.06489637072, 529.1697002328],
    [0.00000302826, 5.56013117831, 530.2122299564],
    [0.00000385508, 4.91137191483, 3.1813937377],
    [0.00000254458, 3.58455210274, 1062.5633239269],
    [0.00000244844, 1.59298253869, 1258.4539316256],
    [0.00000227064, 4.65765215856, 2125.8774073792],
    [0.00000304105, 1.75376741282, 6283.0758499914],
    [0.00000287288, 2.95635370067, 305.3461693927],
    [0.00000224854, 3.50099765253, 1699.2792165032],
    [0.00000206026, 1.03192385893, 1898.3512179396],
    [0.00000189685, 1.04124698047, 508.3503240922],
    [0.00000235578, 0.92416895439, 1056.2005364515],
    [0.00000210609, 4.02134591862, 490.3340891794],
    [0.00000188745, 5.71463346844, 99.1606209555],
    [0.00000179082, 6.10222002951, 526.7702037878],
    [0.00000177005, 4.52323052516, 532.6117264014],
    [0.00000164689, 3.47714842774, 528.9402055692],
    [0.00000164585, 0.86380555242, 530.44172462],
    [0.00000192018, 0.31042772808, 569.0478410098],
    [0.00000217613, 5.68326814925, 453.424893819],
    [0.00000154626, 1.2624250143, 519.3960243561],
    [0.00000153593, 2.20032240084, 11.0457002639],
    [0.00000208311, 3.39287059113, 1439.5096981492],
    [0.00000158046, 4.32805014383, 525.4981794006],
    [0.00000155478, 0.01448243696, 533.8837507886],
    [0.00000165564, 3.66344459446, 224.3447957019],
    [0.00000139735, 3.35517923192, 647.0108333148],
    [0.00000194856, 5.30459820962, 1021.2488945514],
    [0.00000174847, 1.21550279097, 1471.7530270636],
    [0.00000145297, 4.02621175684, 302.164775655],
    [0.0000016293, 0.4907134985, 2001.4439921582],
    [0.00000142463, 3.75545249652, 227.5261894396],
    [0.00000144173, 1.33176686779, 1788.1448967202],
    [0.00000162873, 0.56256179898, 835.0371344873],
    [0.00000176861, 3.17525918893, 10213.285546211],
    [0.00000120578, 3.08300146416, 539.9859058331],
    [0.0000013567, 3.80012923478, 540.7366653585],
    [0.00000153089, 2.02297606024, 1.4844727083],
    [0.00000121815, 3.78870221205, 524.0618908021],
    [0.00000120032, 0.55319601436, 535.3200393871],
    [0.00000124049, 3.38834311016, 983.1158589136],
    [0.00000123795, 3.34199482893, 525.0250986486],
    [0.0000010443, 3.7655169905, 529.5309064002],
    [0.0000010443, 0.57516865787, 529.851023789],
    [0.00000134226, 0.10239699641, 1574.8458012822],
    [0.00000104654, 3.32893024304, 551.031606097],
    [0.00000114344, 3.33978613495, 750.1036075334],
    [0.00000116158, 0.99764796582, 534.3568315406],
    [0.00000122805, 4.90630340295, 524.2743391232],
    [0.0000010307, 4.41455753031, 963.4027029714],
    [0.00000120897, 5.71565359127, 535.107591066],
    [0.00000110642, 0.32527165996, 2324.9494088156],
    [0.00000093157, 0.02724976523, 1382.8873468466],
    [0.00000093825, 3.2372088223, 1802.3719907218],
    [0.00000091908, 3.03370908674, 440.8252848776],
    [0.00000078833, 5.71541998618, 415.5524906121],
    [0.00000096206, 4.88716709579, 21.3406410024],
    [0.00000087496, 1.66679783619, 831.8557407496],
    [0.00000072096, 4.02261318625, 529.9034134157],
    [0.00000072096, 0.31807246212, 529.4785167735],
    [0.00000073548, 0.73533236562, 2214.7430875962],
    [0.00000095404, 5.93817256254, 35.4247226521],
    [0.00000072139, 0.2683305902, 518.6452648307],
    [0.00000072878, 4.4613274764, 39.3568759152],
    [0.00000071452, 5.67202354183, 511.5317178299],
    [0.00000060011, 1.64274398708, 1361.5467058442],
    [0.00000082322, 2.58316696077, 531.1754378029],
    [0.00000068707, 4.9855348886, 547.8502123593],
    [0.00000079198, 1.73075015296, 528.2064923863],
    [0.00000074038, 4.41994008121, 173.9422195228],
    [0.00000065451, 1.02004729709, 2104.5367663768],
    [0.00000065958, 0.29867934563, 2317.8358618148],
    [0.00000055536, 4.7922393626, 643.8294395771],
    [0.00000055262, 2.27825840796, 107.0249274817],
    [0.00000052105, 4.62588942965, 960.2213092337],
    [0.00000052148, 1.98729626729, 1048.3362299253],
    [0.0000005156, 1.64669499054, 514.7131115676],
    [0.00000066065, 0.59752988902, 230.5645708254],
    [0.00000050111, 3.13528773297, 387.2413149608],
    [0.00000049711, 2.69410661219, 544.6688186216],
    [0.00000067372, 1.02825832038, 1364.7280995819],
    [0.00000050617, 0.31750972006, 2641.3412784722],
    [0.00000052715, 1.48379175765, 1056.9342496344],
    [0.00000057133, 0.7223757702, 92.0470739547],
    [0.00000045698, 0.23070104259, 2538.2485042536],
    [0.0000006012, 3.7802249597, 1061.829610744],
    [0.00000043674, 0.36671900326, 2.4476805548],
    [0.00000049748, 1.88152542617, 679.2541622292],
    [0.00000059167, 0.8947875433, 494.2662424425],
    [0.00000058551, 2.31298999222, 1057.8974574809],
    [0.00000047067, 2.35234857561, 3178.1457905676],
    [0.00000043978, 1.08800777407, 430.5303441391],
    [0.00000041687, 0.97719980019, 1059.430114299],
    [0.00000042076, 3.44819721175, 70.8494453042],
    [0.00000045598, 4.91679890859, 312.4597163935],
    [0.00000046173, 5.50676597516, 2428.0421830342],
    [0.00000040142, 1.53613009421, 618.5566453116],
    [0.00000048294, 5.47091338823, 106.2741679563],
    [0.00000048551, 5.94316336415, 1038.0412891868],
    [0.00000051793, 3.46658895899, 565.1156877467],
    [0.00000049105, 4.15096345615, 523.5406259403],
    [0.00000037509, 1.12992183128, 2751.5475996916],
    [0.00000041687, 4.06257397973, 1059.3337460794],
    [0.00000039658, 2.00248258969, 1148.2476104062],
    [0.00000041541, 5.44680900827, 1514.2912967165],
    [0.00000040916, 4.62466156885, 10.2949407385],
    [0.00000036012, 2.20109779973, 1891.2376709388],
    [0.00000040752, 0.18388543996, 18.1592472647],
    [0.00000049181, 6.20531501744, 3340.6124266998],
    [0.00000044449, 0.19000018391, 535.8413042489],
    [0.00000036844, 5.73755081465, 529.4303326637],
    [0.00000036844, 4.88632014089, 529.9515975255],
    [0.00000034069, 1.16404842727, 672.1406152284],
    [0.00000036613, 4.18935208995, 934.9485149682],
    [0.00000041452, 1.77606071152, 1593.0050485469],
    [0.00000033, 3.84595186757, 522.529233984],
    [0.00000035445, 0.77567886722, 522.6256022036],
    [0.00000046145, 3.74589770529, 1512.8068240082],
    [0.00000032615, 5.83710843194, 124.433415221],
    [0.0000003485, 4.49564263533, 1060.3451380357],
    [0.00000044411, 4.40635138657, 760.25553592],
    [0.00000030459, 4.38569932563, 1585.1407420207],
    [0.00000034398, 4.90880656523, 142.4496501338],
    [0.00000030434, 3.29889796264, 217.2312487011],
    [0.00000028933, 1.19798110052, 121.2520214833],
    [0.0000003378, 2.95287755985, 628.8515860501],
    [0.00000029909, 3.5591889991, 536.7563279856],
    [0.00000027497, 0.49110736349, 536.8526962052],
    [0.00000028394, 0.99780388701, 2420.9286360334],
    [0.00000033061, 6.0846915979, 567.8240007324],
    [0.00000029412, 4.68225778172, 422.6660376129],
    [0.00000027675, 5.33831999428, 528.4189407074],
    [0.00000027586, 5.28551011249, 530.9629894818],
    [0.00000033966, 6.20368876731, 885.4397106664],
    [0.00000028696, 5.72932042298, 746.9222137957],
    [0.00000024445, 2.5067009049, 99.9113804809],
    [0.00000027889, 0.03859353899, 2634.2277314714],
    [0.00000032993, 0.64338422669, 1058.4187223427],
    [0.00000031356, 0.08398144955, 437.6438911399],
    [0.00000024004, 5.67806719063, 523.0986829556],
    [0.00000030583, 4.71118187651, 1023.9572075371],
    [0.00000027098, 0.93568939988, 497.4476361802],
    [0.00000026727, 3.20464380077, 1158.5425511447],
    [0.00000022304, 4.19158626805, 491.5579294568],
    [0.00000024825, 0.15973065561, 1134.1635287565],
    [0.0000002187, 4.9449021715, 536.2832472336],
    [0.0000002466, 0.71366313977, 2531.1349572528],
    [0.00000022284, 0.46679621201, 521.6142102473],
    [0.00000026906, 6.12438563218, 299.1263942692],
    [0.00000025671, 5.71444480895, 636.7158925763],
    [0.00000019591, 4.17431823492, 1603.2999892854],
    [0.00000023213, 3.43195395791, 561.934294009],
    [0.00000019149, 2.10528308898, 327.4375699205],
    [0.00000024685, 4.22056041469, 621.7380390493],
    [0.00000019711, 2.02810609823, 423.4167971383],
    [0.00000018867, 2.10875171086, 5.6290742925],
    [0.00000025018, 5.13909032222, 860.3099287528],
    [0.0000002122, 0.0412604547, 495.7507151508],
    [0.00000018237, 4.59056549084, 953.1077622329],
    [0.00000019507, 1.91029017314, 1098.7388061044],
    [0.00000020953, 2.57869987681, 458.8415197904],
    [0.00000018009, 3.96639354797, 24.3790223882],
    [0.00000017586, 2.02614680916, 2207.6295405954],
    [0.00000017177, 2.03437805617, 1464.6394800628],
    [0.0000001731, 3.27378701278, 191.9584544356],
    [0.00000018075, 1.99928862686, 600.5404103988],
    [0.00000017873, 3.86678470802, 537.7677199419],
    [0.00000020924, 0.03035795063, 1166.4068576709],
    [0.00000019198, 4.29792545196, 563.6312150384],
    [0.00000016936, 4.26571329038, 2435.155730035],
    [0.00000016624, 3.85361101962, 2228.9701815978],
    [0.00000016159, 0.21846540542, 1049.0869894507],
    [0.00000020802, 4.97736593129, 88.865680217],
    [0.00000019778, 0.93154236594, 505.3119427064],
    [0.00000018387, 3.75284915185, 1969.2006632438],
    [0.00000016117, 1.17216875347, 1677.9385755008],
    [0.00000016272, 3.90786168126, 526.9826521089],
    [0.0000001617, 0.43269852873, 532.3992780803],
    [0.00000015853, 3.02589483126, 501.3797894433],
    [0.00000016073, 0.59289977863, 32.2433289144],
    [0.00000015212, 0.95366780101, 988.532484885],
    [0.00000015273, 3.5231511102, 460.5384408198],
    [0.00000018509, 3.41682292159, 554.0699874828],
    [0.00000016176, 2.52644603855, 4.665866446],
    [0.00000014712, 5.41386260565, 1058.8606653274],
    [0.00000014529, 4.85959006178, 1070.4276304531],
    [0.00000017117, 0.47977883008, 114.1384744825],
    [0.00000018655, 4.97897470623, 1151.4290041439],
    [0.00000018715, 0.73543500526, 523.4711899711],
    [0.00000014496, 1.33864296077, 558.0021407459],
    [0.00000015092, 1.62201170536, 2015.6710861598],
    [0.00000013768, 4.48236015474, 67.6680515665],
    [0.00000017922, 3.60811042035, 535.9107402181],
    [0.00000013832, 1.07361243872, 1585.8915015461],
    [0.00000014583, 3.99010215681, 28.3111756513],
    [0.0000001375, 2.09722252387, 450.9772132642],
    [0.00000013536, 0.76908575684, 2737.32050569],
    [0.00000013707, 3.60868435075, 498.6714764576],
    [0.00000013957, 3.93496730766, 1592.2542890215],
    [0.00000013013, 0.78393846491, 598.8434893694],
    [0.00000013524, 5.01956785845, 2655.5683724738],
    [0.00000015548, 5.77710440394, 63.7358983034],
    [0.0000001425, 3.29326648288, 462.0229135281],
    [0.00000014315, 5.64097491228, 1550.939859646],
    [0.00000015356, 5.69682578495, 33.9402499438],
    [0.00000012263, 1.85125474032, 635.9651330509],
    [0.00000014741, 1.09335801256, 945.2434557067],
    [0.00000013719, 5.63893195637, 113.3877149571],
    [0.00000012034, 3.12964294602, 938.1299087059],
    [0.00000012616, 0.73397485703, 560.7104537316],
    [0.00000012686, 1.5257940487, 531.387886124],
    [0.00000012686, 2.81489159967, 527.9940440652],
    [0.00000011798, 2.4270937104, 731.9443602687],
    [0.00000015037, 4.51296688554, 155.7829722581],
    [0.00000013428, 3.15625492155, 5.4166259714],
    [0.0000001301, 5.25935589736, 2744.4340526908],
    [0.00000014712, 5.90909648145, 1059.903195051],
    [0.00000011828, 2.23340715865, 608.404716925],
    [0.00000011471, 1.17828159225, 0.9632078465],
    [0.00000015363, 1.10456127711, 381.6122406683],
    [0.00000014177, 0.26373282555, 151.0476698429],
    [0.00000011186, 1.62250458708, 528.2546764961],
    [0.00000011186, 2.71818106129, 531.1272536931],
    [0.00000012032, 0.99005156584, 597.3590166611],
    [0.00000010863, 4.64117868734, 248.7238180901],
    [0.00000013322, 0.82171739269, 944.9828232758],
    [0.00000014119, 0.13240053257, 378.6432952517],
    [0.00000014298, 4.58560781567, 1173.5204046717],
    [0.00000010615, 6.13511053253, 629.6023455755],
    [0.00000011266, 3.44099588535, 210.1177017003],
    [0.00000011694, 6.10110767151, 2950.619601128],
    [0.0000001037, 4.42599703408, 429.7795846137],
    [0.00000010323, 1.24104744878, 605.9570363702],
    [0.00000013781, 4.55129649335, 337.732510659],
    [0.00000009728, 0.58564087027, 1159.2933106701],
    [0.00000009732, 2.62318310146, 1251.3403846248],
    [0.00000009592, 1.71806518721, 1781.0313497194],
    [0.00000009542, 1.84490363894, 2524.021410252],
    [0.00000013151, 4.43614253391, 1041.2226829245],
    [0.00000010946, 5.58575024763, 46.470422916],
    [0.0000000997, 4.52160304835, 9.5612275556],
    [0.00000009005, 2.61830190154, 1165.6560981455],
    [0.00000009077, 3.85345236239, 754.0357607965],
    [0.00000008886, 1.89018107575, 530.914805372],
    [0.00000008886, 2.45050457262, 528.4671248172],
    [0.0000001159, 3.39700661493, 73.297125859],
    [0.00000009816, 4.64751787428, 69.1525242748],
    [0.00000012109, 4.85223951419, 1020.025054274],
    [0.00000008866, 1.63035085748, 195.1398481733],
    [0.00000012231, 6.14422943214, 72.0732855816],
    [0.00000011861, 6.05937783312, 721.6494195302],
    [0.00000008635, 0.16436387127, 1056.4611688824],
    [0.0000001079, 0.63662383032, 530.5847369719],
    [0.0000001079, 3.70406181805, 528.7971932173],
    [0.00000007989, 3.82641746989, 1058.6311706638],
    [0.00000008394, 2.58792092563, 525.5463635104],
    [0.00000010592, 0.63539606039, 2847.5268269094],
    [0.00000007749, 1.75600352899, 521.8266585684],
    [0.00000008309, 1.75332367881, 533.8355666788],
    [0.00000009319, 1.23585389267, 483.2205421786],
    [0.00000010339, 4.58616303508, 319.5732633943],
    [0.00000007601, 2.58490717494, 537.5552716208],
    [0.00000010477, 3.37774704651, 456.3938392356],
    [0.00000008635, 4.87197749696, 1062.302691496],
    [0.00000007859, 0.38734430101, 1064.7985561606],
    [0.00000007602, 0.36299136019, 1063.5747158832],
    [0.00000009231, 5.431488248, 8.0767548473],
    [0.00000007989, 1.21335631002, 1060.1326897146],
    [0.00000009972, 2.04366896945, 685.4739373527],
    [0.00000008026, 1.98667531129, 405.2575498736],
    [0.00000007215, 4.30475971943, 31.019488637],
    [0.00000007387, 5.3291759331, 148.0787244263],
    [0.00000007729, 2.97295947216, 320.3240229197],
    [0.00000006822, 2.29868018477, 166.828672522],
    [0.00000006743, 2.7868574307, 1054.7160637432],
    [0.00000007685, 6.15668649529, 334.5511169213],
    [0.00000007484, 0.64173631183, 952.3570027075],
    [0.0000000844, 2.58974655797, 1201.831580323],
    [0.00000006906, 3.07910623893, 100.6450936638],
    [0.00000007169, 0.1349283377, 842.1506814881],
    [0.00000006629, 0.53834433594, 3053.7123753466],
    [0.00000008934, 0.96120225738, 602.9880909536],
    [0.00000007493, 3.51969165167, 2332.0629558164],
    [0.00000007136, 0.03448152668, 739.8086667949],
    [0.00000006677, 0.45441778626, 1912.5783119412],
    [0.00000007657, 0.10315646867, 408.4389436113],
    [0.00000006322, 1.02024397349, 1994.3304451574],
    [0.00000008709, 3.26440854068, 576.1613880106],
    [0.00000007535, 3.00289317558, 1060.8664028975],
    [0.00000006829, 2.18322886511, 284.1485407422],
    [0.000000086, 0.67499551222, 2854.6403739102],
    [0.00000006151, 4.66705028005, 1091.6252591036],
    [0.00000007341, 6.04359053153, 6.2197751235],
    [0.00000006859, 4.99347916841, 945.9942152321],
    [0.0000000673, 2.13274400504, 528.0464336919],
    [0.0000000673, 2.20794164333, 531.3354964973],
    [0.00000007602, 4.67235401511, 1055.1891444952],
    [0.00000006013, 0.39505360832, 1035.002907801],
    [0.00000005971, 4.49604367073, 498.1983957056],
    [0.00000007321, 5.96564868559, 2957.7331481288],
    [0.00000006974, 5.1052139598, 277.0349937414],
    [0.00000005831, 0.91029898197, 1276.6131788903],
    [0.00000007683, 4.78953562962, 247.2393453818],
    [0.00000005605, 2.83446874702, 513.2286388593],
    [0.00000005914, 5.25663173098, 1053.9653042178],
    [0.00000007609, 5.67719128884, 351.8165923087],
    [0.00000005507, 6.11803493365, 561.1835344836],
    [0.00000005497, 5.972207106, 810.6581120991],
    [0.00000005666, 1.34586791176, 1064.0477966352],
    [0.00000005378, 1.50621701403, 546.1532913299],
    [0.00000006378, 4.76469958996, 1493.093668066],
    [0.00000005234, 3.23939752237, 355.7487455718],
    [0.00000006789, 4.06132305563, 303.8616966844],
    [0.00000006815, 3.11788390976, 1053.7528558967],
    [0.00000005065, 4.11506105627, 1059.2218714948],
    [0.00000005099, 4.22926958912, 1176.7017984094],
    [0.00000004952, 1.58008800266, 2840.4132799086],
    [0.00000005422, 3.42310480407, 757.2171545342],
    [0.00000004897, 5.68226364532, 245.5424243524],
    [0.00000005382, 3.62538236868, 512.4254897072],
    [0.00000004765, 1.45902602837, 2097.423219376],
    [0.00000005065, 0.92471272365, 1059.5419888836],
    [0.00000005175, 5.8845345811, 3267.0114707846],
    [0.00000005666, 4.11643761931, 908.3342603463],
    [0.00000004955, 3.41906309446, 1069.6768709277],
    [0.00000005153, 0.71530340802, 546.956440482],
    [0.0000000476, 2.46960565366, 415.2918581812],
    [0.00000006352, 4.38378276869, 26087.9031415742],
    [0.00000004911, 1.51731652916, 512.2824773553],
    [0.00000004553, 3.05075122003, 509.2440959695],
    [0.00000004672, 3.60383159223, 234.6397364404],
    [0.00000004324, 1.28993461232, 550.1378342197],
    [0.00000004652, 4.74896633148, 1489.9122743283],
    [0.00000004403, 2.46826855364, 1127.0499817557],
    [0.00000004625, 2.09838701102, 857.1285350151],
    [0.00000004688, 0.82987219835, 504.561183181],
    [0.00000004144, 3.28540382801, 970.5162499722],
    [0.00000005736, 4.94808815046, 707.5653378805],
    [0.00000004256, 4.52622489765, 512.1648572763],
    [0.00000004431, 6.20712357569, 519.656656787],
    [0.00000005723, 0.80521226018, 1065.0110044817],
    [0.00000004076, 0.44309694438, 469.8872200543],
    [0.00000005654, 3.17912882291, 280.9671470045],
    [0.00000004761, 3.08265578516, 850.0149880143],
    [0.00000005007, 6.09092690792, 491.8185618877],
    [0.00000003987, 2.63449604548, 447.9388318784],
    [0.00000004311, 1.91087363576, 416.3032501375],
    [0.00000004806, 4.82950723208, 1289.9465010146],
    [0.00000004127, 2.41265579129, 1578.0271950199],
    [0.00000004072, 6.09764619553, 547.2170729129],
    [0.00000005086, 4.84522495354, 114.3991069134],
    [0.00000004414, 3.50154180015, 554.8207470082],
    [0.00000004733, 2.24216539355, 1087.6931058405],
    [0.000000039, 2.34423548886, 739.0579072695],
    [0.0000000421, 3.42569154211, 203.0041546995],
    [0.00000004864, 0.51744939195, 3163.918696566],
    [0.0000000384, 1.91187633714, 479.2883889155],
    [0.00000004002, 4.87046745482, 916.9322800554],
    [0.00000004569, 4.91237033477, 724.8308132679],
    [0.00000004115, 5.12865246696, 1012.9115072732],
    [0.00000003971, 5.21041592079, 1894.4190646765],
    [0.00000004628, 4.53026378084, 567.5633683015],
    [0.00000004155, 5.40151847566, 782.3469364478],
    [0.00000004429, 4.90565615927, 1025.4416802454],
    [0.00000004649, 4.64759909895, 105.5404547734],
    [0.00000004166, 2.66734467932, 1587.5884225755],
    [0.0000000455, 3.9693191689, 237.6781178262],
    [0.00000004232, 4.10305254748, 2042.4977891028],
    [0.00000004613, 4.23969121478, 295.0512286542],
    [0.00000003571, 3.6594791282, 1080.7225711916],
    [0.00000004017, 0.70412765332, 202.2533951741],
    [0.00000003544, 5.95476908217, 849.2642284889],
    [0.00000003497, 4.37215725203, 1059.5943785103],
    [0.00000003507, 3.90044894199, 589.4947101349],
    [0.00000003472, 2.42807639358, 580.0935412737],
    [0.00000004605, 2.01079969091, 391.1734682239],
    [0.00000003415, 0.93397733419, 3067.9394693482],
    [0.0000000368, 2.78358470505, 547.0994528339],
    [0.00000003974, 0.64083518043, 3171.0322435668],
    [0.00000003446, 5.94538006088, 1049.8207026336],
    [0.00000003807, 1.72304764409, 102.1295663721],
    [0.00000003698, 4.34881325753, 326.6868103951],
    [0.00000003345, 2.01843885286, 103.1409583284],
    [0.00000003338, 5.11644597796, 103.0445901088],
    [0.00000003565, 5.42059424242, 81.7521332162],
    [0.00000003856, 4.79741795869, 222.8603229936],
    [0.00000003797, 5.52984960227, 209.3669421749],
    [0.00000003497, 0.66761652789, 1059.1694818681],
    [0.00000003252, 0.25412920997, 3370.1042450032],
    [0.0000000335, 5.33479619431, 1077.5411774539],
    [0.00000004028, 2.14386378215, 81.0013736908],
    [0.00000004303, 2.23044606545, 373.9079928365],
    [0.00000003455, 4.99170171719, 488.8496164711],
    [0.00000004402, 4.47865911288, 987.3086446076],
    [0.00000003659, 5.44567820919, 104.0559820651],
    [0.00000003291, 0.58946936691, 97.6761482472],
    [0.00000003303, 4.42205069017, 539.7252734022],
    [0.00000003982, 0.94891503004, 986.0848043302],
    [0.00000003665, 3.00278799296, 77.7505439839],
    [0.00000004012, 2.19807079079, 668.2084619653],
    [0.00000003967, 2.90360026128, 486.4019359163],
    [0.00000003955, 3.61063004152, 1123.1178284926],
    [0.00000003729, 5.24253765141, 977.4867846211],
    [0.00000003674, 5.17168202309, 78.7137518304],
    [0.00000003193, 3.6601295717, 145.6310438715],
    [0.00000002958, 5.96791430978, 527.6852275245],
    [0.00000002958, 4.65595664577, 531.6967026647],
    [0.00000003911, 1.81273764385, 306.830642101],
    [0.00000003054, 2.21606143219, 654.1243803156],
    [0.00000002909, 4.64604855654, 522.6892926784],
    [0.00000002909, 5.97782239901, 536.6926375108],
    [0.00000003893, 5.83260636489, 812.1425848074],
    [0.00000003118, 5.63216999615, 570.5323137181],
    [0.00000003671, 2.63966947134, 225.8292684102],
    [0.00000003463, 4.17287676793, 1591.5205758386],
    [0.00000002836, 1.20731250237, 1269.4996318895],
    [0.00000003283, 2.91724442703, 108.7218485111],
    [0.0000000287, 1.83388013858, 1586.625214729],
    [0.00000002796, 1.24128563131, 3156.8051495652],
    [0.00000002903, 5.86858378208, 504.4181708291],
    [0.00000002725, 1.62696049996, 3281.2385647862],
    [0.00000002849, 2.52315879532, 1884.124123938],
    [0.00000003556, 1.43724697553, 572.9799942729],
    [0.00000002918, 1.02389618778, 967.3348562345],
    [0.00000002661, 3.41200091519, 107.7586406646],
    [0.00000003601, 1.64093908538, 833.552661779],
    [0.00000002668, 5.3758166781, 911.3032057629],
    [0.00000002715, 4.7404360122, 554.9637593601],
    [0.00000002622, 2.45936066033, 134.5853436076],
    [0.00000002627, 3.82215257787, 144.1465711632],
    [0.00000003601, 2.04227185598, 991.7138786227],
    [0.00000002821, 2.63735750033, 502.8642621516],
    [0.00000002566, 5.17871233769, 93.531546663],
    [0.00000003142, 6.19570189655, 539.2521926502],
    [0.00000002731, 6.2441699717, 522.4655435092],
    [0.00000002731, 4.37970098385, 536.91638668],
    [0.00000003175, 1.25554977339, 520.129737539],
    [0.00000003337, 2.55862908493, 775.233389447],
    [0.00000002456, 3.04358904051, 1074.3597837162],
    [0.00000003083, 4.79549905942, 3060.8259223474],
    [0.00000002369, 0.89961386019, 2310.722314814],
    [0.00000002685, 1.6767701729, 556.5176680376],
    [0.00000002456, 1.99618473941, 1044.4040766622],
    [0.00000003031, 4.94699249364, 521.0929453855],
    [0.00000003031, 5.67687846191, 538.2889848037],
    [0.00000002647, 2.21150970566, 611.4430983108],
    [0.00000002779, 4.06587587287, 1065.6017053127],
    [0.00000003226, 6.17392127144, 522.7898664149],
    [0.00000003226, 4.4499496841, 536.5920637743],
    [0.000000031, 4.48597567816, 1438.0252254409],
    [0.0000000235, 4.85021460619, 285.3723810196],
    [0.00000002947, 2.57601562056, 1819.6374661092],
    [0.00000002452, 2.19106724331, 1090.4014188262],
    [0.00000002323, 4.17904065081, 529.0578256482],
    [0.00000002323, 0.16164499756, 530.324104541],
    [0.00000002337, 2.52600500225, 1474.9344208013],
    [0.00000003159, 0.76090441015, 457.617679513],
    [0.00000003023, 2.94123144657, 526.722019678],
    [0.00000003023, 1.3994542018, 532.6599105112],
    [0.00000002627, 3.80975739889, 1094.8066528413],
    [0.00000002537, 1.67334991532, 12566.1516999828],
    [0.00000002186, 2.35390986413, 162.8965192589],
    [0.00000002177, 1.28491274387, 2413.8150890326],
    [0.00000002273, 1.32684908668, 1589.1210793936],
    [0.00000002362, 5.63895709044, 3583.4033404412],
    [0.00000002201, 5.72550332247, 2043.9822618111],
    [0.0000000235, 3.14771594022, 902.7051860538],
    [0.00000002278, 0.27874028612, 6681.2248533996],
    [0.00000002837, 5.4706467326, 1440.9941708575],
    [0.00000002584, 2.41036745166, 2122.6960136415],
    [0.0000000214, 3.00473448189, 241.6102710893],
    [0.00000002201, 0.31427215056, 376.1956146969],
    [0.00000002216, 4.40413629466, 1053.2315910349],
    [0.00000002435, 5.80690345453, 3274.1250177854],
    [0.00000002764, 1.10031553905, 39.6175083461],
    [0.00000002251, 3.73285596763, 1067.4586850365],
    [0.00000002781, 3.62986106775, 451.9404211107],
    [0.00000002419, 1.65592259758, 31.492569389],
    [0.00000002042, 0.45345339204, 732.6951197941],
    [0.00000002525, 5.46312983734, 373.0142209592],
    [0.00000002747, 3.74658101391, 1261.6353253633],
    [0.00000002035, 5.41793570571, 523.849442481],
    [0.00000002035, 5.20593524984, 535.5324877082],
    [0.00000002366, 2.81483964657, 3707.8367556622],
    [0.0000000238, 4.1200137358, 429.0458714308],
    [0.00000002407, 1.65593453429, 824.7421937488],
    [0.00000002223, 3.54290082979, 842.9014410135],
    [0.00000002548, 2.30029523646, 1128.534454464],
    [0.00000002358, 0.2870519488, 3480.3105662226],
    [0.00000001911, 1.27847307998, 501.2367770914],
    [0.0000000209, 3.51987922543, 417.0369633204],
    [0.0000000256, 5.75789982732, 232.0490435337],
    [0.00000001903, 5.97222852188, 1254.5217783625],
    [0.0000000248, 5.94758800259, 610.6923387854],
    [0.00000002279, 5.72874534306, 1482.7987273275],
    [0.00000001873, 2.16130448423, 1208.9451273238],
    [0.0000000251, 3.56542524478, 601.7642506762],
    [0.00000002186, 5.05662323853, 1553.6481726317],
    [0.00000001823, 0.11309992342, 111.1695290659],
    [0.00000002024, 0.75324302754, 59.8037450403],
    [0.00000001958, 2.65760348463, 109.2431133729],
    [0.00000001875, 4.96409845324, 1590.0361031303],
    [0.0000000236, 2.96313117699, 488.63716815],
    [0.00000002199, 2.81488304964, 298.2326223919],
    [0.00000002128, 0.30012341312, 821.703812363],
    [0.00000002352, 0.09727662567, 36.6485629295],
    [0.00000002046, 3.01987263602, 1567.7322542814],
    [0.00000001954, 0.78523241391, 1415.130675761],
    [0.00000001787, 5.23586420667, 1059.6425626201],
    [0.00000001998, 3.65279516743, 1432.3961511484],
    [0.00000002173, 0.53973434031, 1065.5322693435],
    [0.00000002273, 4.41222326623, 1589.024711174],
    [0.00000001716, 4.22633880361, 503.8274699981],
    [0.0000000197, 4.25081658948, 362.8622925726],
    [0.00000001851, 2.94909390732, 110.2545053292],
    [0.00000001948, 0.06784201686, 1446.62324515],
    [0.00000001829, 0.32427522713, 1578.7779545453],
    [0.00000002146, 2.12285077619, 1363.2436268736],
    [0.00000001744, 5.75944789009, 1051.3051753419],
    [0.00000002096, 1.34830261581, 570.7447620392],
    [0.00000001608, 0.11434714708, 555.5544601911],
    [0.00000001681, 5.05615470433, 543.1843459133],
    [0.00000001681, 5.56771625121, 516.1975842759],
    [0.00000001656, 6.18525423988, 3686.4961146598],
    [0.00000001685, 4.46368653783, 56.6223513026],
    [0.00000002027, 1.05859637798, 50.4025761791],
    [0.00000001607, 1.86217702449, 465.9550667912],
    [0.00000001573, 0.99918451715, 3473.1970192218],
    [0.0000000162, 4.04604445763, 683.1863154923],
    [0.00000001775, 3.68378563186, 1688.2335162393],
    [0.00000001551, 2.34276361323, 593.426863398],
    [0.00000001649, 2.83516671724, 1354.4331588434],
    [0.00000001791, 0.10409422402, 502.6036297207],
    [0.00000001532, 6.1130441624, 350.3321196004],
    [0.00000001533, 0.91717120275, 1052.3165672982],
    [0.00000001872, 2.94680344134, 1141.1340634054],
    [0.00000001597, 2.27829199459, 2200.5159935946],
    [0.00000001894, 1.68941410908, 229.0800981171],
    [0.0000000195, 2.53468264013, 487.1526954417],
    [0.00000001486, 1.7496446041, 1518.2234499796],
    [0.00000001691, 0.69039681436, 1226.2106027112],
    [0.00000001466, 4.96866285281, 426.5500067662],
    [0.00000001581, 6.26565156779, 696.5196376166],
    [0.00000001746, 4.43362462057, 1467.8208738005],
    [0.00000001484, 3.98628996611, 995.6460318858],
    [0.00000001673, 4.23659174125, 556.7783004685],
    [0.00000001573, 1.54983748502, 425.6349830295],
    [0.00000001613, 3.524942906, 1268.7488723641],
    [0.00000001696, 4.04893974553, 313.2104759189],
    [0.00000001787, 6.08709488043, 1059.1212977583],
    [0.00000001459, 1.86680810334, 426.6463749858],
    [0.0000000186, 0.59121810077, 1160.027023853],
    [0.00000001387, 0.25367096621, 216.4804891757],
    [0.00000001599, 0.99304321709, 1588.1096874373],
    [0.00000001645, 0.25602007166, 630.3360587584],
    [0.00000001796, 2.27748034433, 424.1505103212],
    [0.00000001802, 1.81981056283, 572.2292347475],
    [0.00000001812, 1.18636472457, 1340.3490771937],
    [0.0000000134, 5.68788468184, 1058.109905802],
    [0.0000000138, 4.13060050591, 384.0599212231],
    [0.00000001346, 0.84106067159, 1066.5436612998],
    [0.00000001714, 2.6654981626, 1164.9223849626],
    [0.00000001547, 0.43253240963, 1097.514965827],
    [0.00000001293, 2.98651040858, 394.3548619616],
    [0.00000001329, 2.37930449726, 1628.429771199],
    [0.00000001657, 2.95696862208, 473.068613792],
    [0.00000001353, 4.16373125033, 2498.8916283384],
    [0.00000001375, 3.98044437537, 1093.322180133],
    [0.00000001299, 0.48747523459, 1357.6145525811],
    [0.00000001302, 1.30247274619, 494.4786907636],
    [0.00000001267, 0.0548052268, 1162.5228885176],
    [0.00000001321, 5.18040372739, 990.2294059144],
    [0.00000001569, 0.55945561191, 827.9235874865],
    [0.00000001423, 3.96899444518, 1052.2201990786],
    [0.0000000169, 0.44964896142, 1696.0978227655],
    [0.00000001234, 1.89692910755, 436.1594184316],
    [0.00000001258, 3.15493584077, 1162.426520298],
    [0.00000001595, 0.19920339821, 138.5174968707],
    [0.00000001419, 3.11149524713, 1138.0956820196],
    [0.00000001232, 1.13768047601, 2730.2069586892],
    [0.00000001393, 0.44415833192, 958.7368365254],
    [0.00000001576, 0.31444350094, 422.405405182],
    [0.0000000119, 5.92671193419, 215.7467759928],
    [0.00000001464, 3.90911748945, 1066.4472930802],
    [0.00000001194, 5.78013067722, 774.0095491696],
    [0.00000001176, 5.65250585005, 632.831923423],
    [0.00000001168, 0.66078054684, 414.0680179038],
    [0.00000001235, 1.2943483744, 1027.1386012748],
    [0.00000001192, 3.03821340895, 564.9032394256],
    [0.00000001337, 5.18329748556, 427.5613987225],
    [0.00000001581, 0.42493803144, 642.3449668688],
    [0.00000001186, 4.67064465062, 2114.8317071153],
    [0.0000000134, 6.03068103344, 1161.5114965613],
    [0.0000000126, 2.78493696942, 633.7469471597],
    [0.00000001309, 3.48078253389, 1163.4379122543],
    [0.00000001172, 2.47238605689, 632.7355552034],
    [0.0000000112, 4.59709741934, 709.0498105888],
    [0.0000000134, 5.63507440526, 1060.6539545764],
    [0.00000001471, 2.07056839465, 635.231419868],
    [0.00000001112, 5.29416320994, 1065.9742123282],
    [0.00000001108, 1.2651220501, 1279.794572628],
    [0.00000001124, 1.88833997938, 924.7965865816],
    [0.00000001496, 5.90359146936, 388.4651552382],
    [0.00000001129, 0.4878608071, 915.235359026],
    [0.00000001308, 1.27136775865, 913.7508863177],
    [0.00000001111, 3.36431821868, 177.8743727859],
    [0.00000001525, 3.52113299655, 252.6559713532],
    [0.00000001398, 1.23224313252, 2627.1141844706],
    [0.00000001089, 5.17678553686, 946.727928415],
    [0.00000001292, 1.34832291759, 981.6313862053],
    [0.00000001132, 0.51083517505, 1663.8544938511],
    [0.00000001259, 5.01927099823, 1887.3055176757],
    [0.00000001153, 3.89300870077, 395.105621487],
    [0.00000001064, 3.91071393639, 1304.9243545416],
    [0.00000001202, 3.61933972889, 269.9214467406],
    [0.00000001395, 1.40455747646, 586.3133163972],
    [0.00000001451, 2.99312416234, 244.318584075],
    [0.0000000112, 0.70794225879, 103.6140390804],
    [0.00000001302, 4.07372257135, 636.9765250072],
    [0.00000001037, 2.10542832786, 1798.4398374587],
    [0.00000001069, 5.46748862799, 3899.7952100978],
    [0.00000001025, 0.81899907032, 951.6232895246],
    [0.00000001018, 2.44177900684, 623.2225117576],
    [0.00000001172, 0.11078488057, 3796.7024358792],
    [0.00000001076, 5.08119196367, 1681.1199692385],
    [0.00000001373, 1.13869327899, 4590.910180489],
    [0.000000013, 5.45256830638, 758.7710632117],
    [0.0000000104, 2.40822308938, 313.9441891018],
    [0.00000001117, 0.21068971066, 102.5715093568],
    [0.00000001033, 2.65742933066, 1028.3624415522],
    [0.00000001022, 1.3592214352, 1262.3860848887],
    [0.00000000975, 1.34801883307, 665.0270682276],
    [0.00000001358, 4.62267092406, 448.6895914038],
    [0.0000000098, 3.55997020263, 961.705781942],
    [0.00000001042, 5.48044556857, 170.7608257851],
    [0.00000000955, 3.71244576511, 645.3139122854],
    [0.00000001229, 5.40835035151, 2004.364753465],
    [0.00000001119, 1.89211462832, 1901.5326116773],
    [0.0000000095, 1.31425968942, 1372.5924061081],
    [0.00000001243, 4.71981497526, 670.916774951],
    [0.00000001099, 2.80854803975, 611.5861106627],
    [0.00000001033, 5.44057825526, 631.8205314667],
    [0.00000000888, 0.32570697301, 1475.6851803267],
    [0.00000000881, 6.24114441352, 4002.8879843164],
    [0.00000001198, 2.56431700661, 8521.1198767086],
    [0.00000001005, 1.02223932744, 3384.3313390048],
    [0.00000000875, 1.38649800785, 701.936263588],
    [0.00000001166, 1.68053256043, 1511.3223512999],
    [0.00000000967, 0.1941984663, 828.8173593638],
    [0.00000001147, 5.62237625874, 1390.0008938474],
    [0.00000000873, 1.78823938585, 322.0209439491],
    [0.00000001137, 1.2521787875, 950.6600816781],
    [0.00000001061, 5.43420240433, 1014.1353475506],
    [0.00000001061, 5.91924764699, 1052.7896480502],
    [0.00000000907, 5.72880202106, 3590.516887442],
    [0.00000000901, 1.99031678409, 1482.0479678021],
    [0.00000000918, 3.86739969334, 340.7708920448],
    [0.00000001186, 3.87608972833, 1291.4309737229],
    [0.00000000844, 4.80951836532, 231.4583427027],
    [0.00000000939, 4.90767990951, 1703.2113697663],
    [0.00000001042, 0.93682125769, 297.6419215609],
    [0.00000001076, 3.77875560329, 2861.753920911],
    [0.00000000877, 2.57720864413, 357.4456666012],
    [0.00000000988, 3.77402129077, 7210.9158184942],
    [0.00000000876, 2.04445500328, 2516.9078632512],
    [0.00000001109, 1.10717230914, 347.8844390456],
    [0.00000000826, 1.26237086555, 20956.2620575166],
    [0.00000000914, 1.85190163894, 1031.0707545379],
    [0.00000000997, 3.8726751475, 1505.6932770074],
    [0.0000000081, 0.7386618795, 3789.5888888784],
    [0.00000001118, 3.02477319721, 892.5532576672],
    [0.00000000883, 5.67539794824, 526.1678467456],
    [0.00000000883, 4.94847300731, 533.2140834436],
    [0.00000000832, 0.30355557156, 348.635198571],
    [0.0000000079, 6.20154366253, 106.0135355254],
    [0.00000000974, 3.07289069716, 25035.6347583858],
    [0.00000001094, 4.49536324699, 447.7958195265],
    [0.00000000787, 4.25746871915, 1056.6736172035],
    [0.0000000088, 6.12038037656, 1215.1649024473],
    [0.00000000839, 3.46918687285, 4686.8894077068],
    [0.00000000965, 0.47893715886, 1519.920371009],
    [0.00000001017, 3.23009565265, 1019.7644218431],
    [0.00000000929, 2.33110288801, 1130.2313754934],
    [0.00000000951, 0.17980074695, 25021.4076643842],
    [0.00000001003, 6.06276371667, 112.6540017742],
    [0.00000001038, 2.60809280601, 2545.3620512544],
    [0.00000000841, 3.14891407666, 643.0786800517],
    [0.00000000778, 3.23372323101, 1152.9134768522],
    [0.00000000782, 2.23832335246, 1731.5225454176],
    [0.0000000075, 0.55290509814, 153.4953503977],
    [0.00000001032, 4.77018575989, 3075.053016349],
    [0.00000000967, 3.36244704957, 1744.8558675419],
    [0.00000000899, 1.08525568253, 1053.1621550657],
    [0.00000000742, 2.00354172793, 896.4854109303],
    [0.00000000989, 3.84990051274, 566.3395280241],
    [0.00000000989, 0.49078513563, 493.0424021651],
    [0.00000000742, 4.21703361262, 948.2124011233],
    [0.00000000845, 3.59171270464, 88.1149206916],
    [0.00000000929, 5.99864767246, 110.1581371096],
    [0.00000000777, 4.7641510052, 5092.1519581158],
    [0.00000000736, 3.20130154895, 77.962992305],
    [0.00000000766, 4.594798988, 402.2191684878],
    [0.00000000743, 6.13138764518, 432.0148168474],
    [0.0000000087, 2.29117581191, 537.3257769572],
    [0.0000000087, 5.19110249005, 522.056153232],
    [0.00000000789, 1.67092370151, 950.1388168163],
    [0.00000000897, 1.28062307416, 5746.271337896],
    [0.00000000732, 5.42943652152, 1600.1185955477],
    [0.00000000727, 3.55588420259, 6011.4455234754],
    [0.00000000774, 4.89440898129, 8617.0991039264],
    [0.00000000765, 0.45676284977, 77734.01845962799],
    [0.00000000725, 5.32450233982, 172.2452984934],
    [0.00000000823, 2.21479514662, 703.6331846174],
    [0.0000000078, 1.36195167956, 949.12742486],
    [0.00000000736, 2.50442271554, 23969.1392811958],
    [0.00000000731, 5.83268492223, 2108.4689196399],
    [0.00000000976, 0.79158818735, 806.725958836],
    [0.00000000705, 4.27106025046, 259.769518354],
    [0.000000007, 5.59852494874, 443.8636662634],
    [0.00000000902, 2.81720087957, 3259.1471642584],
    [0.00000000815, 4.18553627599, 3377.217792004],
    [0.0000000072, 5.01892865631, 878.3261636656],
    [0.00000000705, 6.12374436623, 657.1627617014],
    [0.00000000707, 0.0384797449, 2218.6752408593],
    [0.0000000093, 2.4954832346, 1436.5407527326],
    [0.00000000961, 4.34057596279, 6915.8595893046],
    [0.00000000899, 4.97320917926, 1570.9136480191],
    [0.00000000682, 0.26050257479, 2225.7887878601],
    [0.00000000703, 1.37324117306, 738.3241940866],
    [0.00000000764, 0.99241506715, 1542.6024723678],
    [0.0000000081, 3.48317459389, 677.7696895209],
    [0.00000000721, 4.93463062086, 64.9597385808],
    [0.00000000784, 2.54541859576, 451.7279727896],
    [0.00000000815, 2.4217165225, 358.9301393095],
    [0.00000000842, 0.87893029284, 369.0820676961],
    [0.00000000923, 0.04638867043, 179.3588454942],
    [0.00000000717, 5.72312048369, 98.8999885246],
    [0.00000000704, 0.48325377506, 718.6110381444],
    [0.00000000766, 2.39202105815, 1834.6153196362],
    [0.00000000652, 4.1686245555, 906.849787638],
    [0.00000000827, 4.33962122071, 1371.8416465827],
    [0.00000000842, 3.38856884583, 157.2674449664],
    [0.00000000792, 1.49965960928, 377.1588225434],
    [0.00000000745, 4.45854548235, 306.0969289181],
    [0.00000000639, 0.08156310396, 650.9429865779],
    [0.00000000767, 3.60652184093, 927.8349679674],
    [0.00000000659, 5.7597194808, 4216.1870797544],
    [0.00000000666, 3.04814223059, 2439.0878832981],
    [0.00000000638, 1.13616165325, 1688.9842757647],
    [0.00000000699, 3.61170438864, 999.5781851489],
    [0.00000000848, 4.72504107277, 444.7574381407],
    [0.00000000799, 3.74034594619, 2274.5468326365],
    [0.00000000787, 1.20457511279, 2943.5060541272],
    [0.00000000773, 1.76065838643, 3333.9287628257],
    [0.00000000809, 5.17024953241, 2431.9743362973],
    [0.00000000657, 0.60457512347, 1724.4089984168],
    [0.00000000805, 0.09901786383, 1474.6737883704],
    [0.00000000645, 0.75334618858, 1751.539531416],
    [0.00000000661, 2.90178651891, 700.4517908797],
    [0.00000000804, 2.63840522723, 9676.4810341156],
    [0.0000000067, 1.36038705887, 100.1720129118],
    [0.00000000866, 5.76540229273, 10846.0692855242],
    [0.0000000065, 2.73749334371, 558.1451530978],
    [0.00000000611, 3.22738343677, 4443.713269194],
    [0.00000000726, 2.09433576268, 2151.0071892928],
    [0.00000000792, 0.24370973638, 3487.4241132234],
    [0.00000000751, 5.81390703713, 446.3113468182],
    [0.00000000853, 4.28810731162, 2964.8466951296],
    [0.00000000614, 3.69080861447, 6121.6518446948],
    [0.0000000062, 0.93234202068, 3046.5988283458],
    [0.00000000698, 5.04281848333, 131.4039498699],
    [0.00000000607, 3.04321843475, 1670.8250285],
    [0.00000000619, 0.690842554, 1144.3154571431],
    [0.00000000596, 2.57575578891, 737.3609862401],
    [0.00000000619, 4.37152142119, 325.9530972122],
    [0.00000000617, 3.74485122373, 920.8644333185],
    [0.00000000591, 3.48178211131, 5760.4984318976],
    [0.0000000059, 5.76615169007, 3634.6210245184],
    [0.00000000592, 1.67926794472, 799.6124118352],
    [0.00000000628, 3.97268935384, 1408.0171287602],
    [0.000000006, 0.77520117111, 1909.3969182035],
    [0.00000000588, 4.88077168579, 9690.7081281172],
    [0.0000000059, 4.55773138616, 627.3671133418],
    [0.00000000611, 2.00459977476, 392.6579409322],
    [0.00000000611, 2.33608587361, 666.723989257],
    [0.0000000066, 3.23495727377, 4312.1663069722],
    [0.00000000579, 0.23689221312, 181.806526049],
    [0.00000000723, 3.17265641927, 3333.498879699],
    [0.00000000589, 5.54950595814, 208.633228992],
    [0.00000000715, 6.07739111387, 3347.7259737006],
    [0.00000000604, 0.54070600496, 427.1194557378],
    [0.00000000774, 3.14130625993, 711.4974911436],
    [0.00000000578, 0.6838218854, 881.5075574033],
    [0.00000000643, 3.30030512509, 282.4516197128],
    [0.0000000075, 3.52320056595, 1818.1529934009],
    [0.00000000733, 3.98414988751, 344.7030453079],
    [0.00000000589, 3.85148384183, 2005.3761454213],
    [0.00000000613, 2.03788975303, 745.4377410874],
    [0.00000000582, 5.43181986865, 2953.8009948657],
    [0.00000000754, 4.23362271932, 1022.7333672597],
    [0.00000000694, 4.97705611923, 1967.7161905355],
    [0.00000000736, 2.16773979972, 601.5036182453],
    [0.00000000736, 2.17294584865, 457.8783119439],
    [0.00000000585, 3.31295262517, 1791.3262904579],
    [0.00000000709, 4.59740934441, 3391.4448860056],
    [0.00000000557, 4.03051673978, 20426.571092422],
    [0.00000000568, 2.97493496281, 4804.209275927],
    [0.00000000749, 4.31005763443, 421.93232443],
    [0.00000000613, 2.48841615646, 1457.525933062],
    [0.00000000554, 4.24041493722, 385.7568422525],
    [0.0000000056, 4.71045037674, 420.9691165835],
    [0.0000000058, 1.24938803404, 5179.5897827258],
    [0.00000000717, 1.78237513008, 90.5626012464],
    [0.00000000743, 0.89577704031, 1670.0742689746],
    [0.00000000575, 1.4073851993, 1656.7409468503],
    [0.00000000559, 5.2799219942, 388.7257876691],
    [0.00000000582, 4.78436996849, 5481.7545583808],
    [0.00000000538, 0.92867899703, 7564.830720738],
    [0.00000000537, 2.70209998895, 205.2223405907],
    [0.00000000549, 2.46772636715, 6702.5604938666],
    [0.00000000543, 5.63815178398, 5062.2699145056],
    [0.00000000552, 3.52928852668, 203.7378678824],
    [0.00000000566, 2.72633185556, 5371.5482371614],
    [0.00000000536, 0.61517068874, 4701.1165017084],
    [0.00000000657, 2.19780034527, 464.7312265138],
    [0.00000000538, 3.89155746884, 10632.7701900862],
    [0.00000000537, 4.39856777959, 8734.4189721466],
    [0.00000000601, 0.02012347688, 426.0769260142],
    [0.00000000569, 4.99684898069, 292.0128472684],
    [0.00000000525, 2.6746062202, 76674.63652943878],
    [0.00000000684, 2.8121237391, 425.1137181677],
    [0.00000000617, 3.05048033943, 1560.6187072806],
    [0.00000000516, 0.26350469761, 5599.074426601],
    [0.00000000653, 1.30320179672, 10110.1927719924],
    [0.00000000587, 4.62055378117, 1784.2127434571],
    [0.00000000516, 0.22590098117, 104.5772469269],
    [0.00000000606, 6.05478522396, 1809.4855377226],
    [0.00000000507, 5.07346157197, 615.5182639258],
    [0.00000000599, 4.14878473534, 184.9879197867],
    [0.00000000621, 2.87138344478, 119.767548775],
    [0.00000000517, 5.2759365553, 6018.5590704762],
    [0.00000000613, 1.73072364996, 607.6539573996],
    [0.00000000516, 4.7650921109, 419.4364597654],
    [0.00000000496, 5.95351653489, 4319.279853973],
    [0.00000000602, 0.81687029998, 680.7386349375],
    [0.00000000611, 6.04727862794, 1366.2125722902],
    [0.00000000494, 0.17691775323, 536.05375257],
    [0.00000000494, 1.02217524155, 523.3281776192],
    [0.00000000579, 5.57316761468, 4752.9915918498],
    [0.00000000662, 4.81579201904, 1595.2926704073],
    [0.00000000496, 4.41325670501, 2758.6611466924],
    [0.00000000497, 4.90759130615, 102.3420146932],
    [0.00000000657, 1.97073031858, 2350.8129039121],
    [0.00000000492, 1.64857690604, 1365.4788591073],
    [0.00000000495, 1.74700930048, 419.532827985],
    [0.00000000482, 2.36084828415, 103.843533744],
    [0.00000000576, 4.33063045778, 4841.8572720668],
    [0.00000000636, 0.80538758266, 664.2763087022],
    [0.00000000495, 3.15151552533, 398.2870152247],
    [0.00000000519, 5.14436211293, 398.1440028728],
    [0.00000000488, 5.53605494571, 5702.1672008196],
    [0.00000000589, 1.83918851359, 2740.5018994277],
    [0.000000006, 1.57258402386, 634.2682120215],
    [0.00000000515, 6.13663617559, 1090.8744995782],
    [0.00000000507, 4.91055727483, 2203.6973873323],
    [0.00000000482, 6.19007011658, 733.428832977],
    [0.00000000482, 1.96061162795, 8631.326197928],
    [0.00000000467, 0.44909285037, 5282.6825569444],
    [0.00000000468, 3.39225847512, 477.0007670551],
    [0.00000000468, 0.94842717325, 582.3811631341],
    [0.00000000553, 0.44395214498, 3995.7744373156],
    [0.00000000469, 0.6336446906, 1895.1698242019],
    [0.00000000543, 1.56691595393, 578.449009871],
    [0.00000000543, 2.77376969444, 480.9329203182],
    [0.00000000573, 1.37924154661, 1132.6790560482],
    [0.00000000645, 1.82777246781, 127.4717966068],
    [0.00000000509, 1.42883658876, 4863.1979130692],
    [0.00000000543, 5.97469828305, 383.0967133766],
    [0.0000000048, 4.52427818977, 2132.99095438],
    [0.00000000466, 0.60089115861, 2645.2734317353],
    [0.00000000468, 2.06138965938, 2047.9144150742],
    [0.00000000463, 5.78476418255, 429.5189521828],
    [0.00000000458, 3.53021126021, 4127.3213995374],
    [0.00000000563, 3.95187506851, 2416.9964827703],
    [0.00000000534, 4.28040929775, 843.6351541964],
    [0.00000000471, 4.45725457382, 2572.1887541974],
    [0.00000000558, 2.14288726656, 594.6507036754],
    [0.00000000588, 1.67757095757, 458.090760265],
    [0.00000000482, 4.23233218604, 6114.538297694],
    [0.00000000449, 4.70271243367, 1221.8485663214],
    [0.00000000625, 2.89222179667, 10529.6774158676],
    [0.00000000447, 5.40550748355, 475.3562356524],
    [0.00000000447, 5.218363472, 584.0256945368],
    [0.00000000466, 3.79998458212, 632.2624744514],
    [0.00000000466, 1.71112241331, 2833.2997329078],
    [0.00000000461, 0.39395878821, 1799.1905969841],
    [0.00000000605, 5.04018627656, 300.6108669775],
    [0.00000000487, 2.27433915423, 321.0577361026],
    [0.00000000476, 2.0616725379, 5584.8473325994],
    [0.00000000527, 1.59944448425, 1336.4169239306],
    [0.00000000447, 2.42457766252, 18837.49819713819],
    [0.00000000477, 1.15122703256, 3259.8979237838],
    [0.00000000445, 6.05106056124, 2535.0671105159],
    [0.0000000045, 3.02825599783, 540.9972977894],
    [0.0000000045, 4.45402230413, 518.3846323998],
    [0.00000000607, 1.47070997908, 6599.467719648],
    [0.00000000504, 2.30045636564, 1990.3982918943],
    [0.00000000595, 2.15046818706, 1746.3403402502],
    [0.00000000465, 3.76774297614, 1083.7609525774],
    [0.00000000602, 1.89096655273, 354.5249052944],
    [0.00000000602, 2.44971909564, 704.8570248948],
    [0.00000000579, 2.28684602417, 597.5714649822],
    [0.00000000579, 2.0538396242, 461.810465207],
    [0.00000000562, 0.48083792934, 1858.9943420244],
    [0.00000000464, 2.03798249125, 1443.4418514123],
    [0.0000000048, 5.15413996768, 1105.8523531052],
    [0.00000000555, 2.4126425203, 1379.7059531089],
    [0.00000000444, 4.31471304203, 420.4478517217],
    [0.00000000597, 0.38553497717, 3184.3655656911],
    [0.0000000052, 6.1291304733, 5856.4776591154],
    [0.00000000459, 6.22599901288, 4113.0943055358],
    [0.00000000442, 1.08908006468, 1068.9431577448],
    [0.00000000473, 5.76062610155, 1674.0064222377],
    [0.00000000545, 5.90694686339, 207.6700211455],
    [0.00000000415, 2.96228935766, 4760.1051388506],
    [0.00000000432, 6.00978313661, 2080.6308247406],
    [0.00000000448, 0.5335434773, 10977.078804699],
    [0.0000000042, 5.89402802331, 4745.878044849],
    [0.00000000427, 5.52450878681, 3906.9087570986],
    [0.00000000412, 0.43255499792, 4105.980758535],
    [0.00000000558, 1.02987232016, 2347.8439584955],
    [0.00000000413, 0.73884800861, 3782.4753418776],
    [0.00000000504, 5.29358240575, 5650.2921106782],
    [0.00000000432, 1.29567764027, 1300.9922012785],
    [0.00000000549, 5.4309212071, 8837.5117463652],
    [0.00000000463, 4.3205671677, 633.305004175],
    [0.00000000465, 0.07680283209, 207.1487562837],
    [0.00000000445, 0.71549866195, 3700.7232086614],
    [0.00000000396, 1.94737984186, 218.7157214094],
    [0.00000000397, 0.11410695116, 5333.9002410216],
    [0.00000000398, 2.9518944349, 9492.1463150048],
    [0.00000000418, 6.08085042236, 206.1373643274],
    [0.00000000399, 3.19412012818, 1937.7080938548],
    [0.00000000412, 2.14157958735, 835.7878940127],
    [0.00000000421, 3.10101017579, 6224.7446189134],
    [0.00000000421, 5.74575098379, 638.4128136057],
    [0.00000000405, 5.57114454703, 2424.8607892965],
    [0.00000000435, 5.91785408829, 4429.4861751924],
    [0.00000000508, 2.07929962372, 736.8397213783],
    [0.00000000489, 5.26819416109, 2424.1100297711],
    [0.00000000474, 0.35023297708, 2879.0193962984],
    [0.00000000395, 3.55410546006, 3693.6096616606],
    [0.00000000483, 5.61092293877, 154.2984995498],
    [0.00000000412, 3.95817314793, 83.3796182764],
    [0.00000000482, 6.21265016851, 25028.521211385],
    [0.00000000384, 0.1002803829, 673.6250879367],
    [0.000000004, 2.77460424659, 2755.4797529547],
    [0.00000000386, 3.30700195922, 6327.837393132],
    [0.000000005, 0.77202686943, 1973.1328165069],
    [0.00000000414, 3.16238841274, 1244.226837624],
    [0.00000000397, 5.90798757004, 50586.73338786459],
    [0.00000000391, 5.34395815407, 670.6561425201],
    [0.00000000435, 2.62532506647, 1230.1427559743],
    [0.00000000482, 0.83788877002, 52175.8062831484],
    [0.00000000468, 5.85278677859, 1970.6851359521],
    [0.00000000472, 5.64546266904, 416.7763308895],
    [0.00000000491, 2.66311701318, 601.2911699242],
    [0.00000000376, 3.16843571095, 5908.3527492568],
    [0.00000000451, 2.86326087284, 2527.2028039897],
    [0.00000000461, 0.43280745403, 9580.5018068978],
    [0.00000000373, 1.51273456935, 9264.1099372412],
];

const X1: &[Term] = &[
    [0.00882389251, PI, 0.0],
    [0.00635297172, 0.10662156868, 1059.3819301892],
    [0.00599720482, 2.42996678275, 522.5774180938],
    [0.0058915706, 1.91556314637, 536.8045120954],
    [0.00081697204, 3.46668108797, 7.1135470008],
    [0.00046201898, 0.45714214032, 1589.0728952838],
    [0.0003250859, 1.74648849928, 1052.2683831884],
    [0.00033891193, 4.10113482752, 529.6909650946],
    [0.00031234303, 2.34698051502, 1066.49547719],
    [0.00021244363, 4.36576178953, 110.2063212194],
    [0.00018156701, 4.00572238779, 426.598190876],
    [0.00013577576, 0.30008010246, 632.7837393132],
    [0.00012889505, 2.57489294062, 515.463871093],
    [0.00009125875, 1.78082469962, 543.9180590962],
    [0.00008085991, 6.16136518902, 949.1756089698],
    [0.00007142547, 3.17267801203, 323.5054166574],
    [0.0000429224, 4.74970626655, 206.1855484372],
    [0.00004393977, 1.14770788063, 735.8765135318],
    [0.00003399164, 2.90091450747, 526.5095713569],
    [0.00003333344, 1.43691652967, 532.8723588323],
    [0.00003873467, 3.33648870101, 14.2270940016],
    [0.00003044408, 1.65428048669, 525.7588118315],
    [0.00003001874, 2.68376982746, 533.6231183577],
    [0.00002933359, 2.61899855005, 419.4846438752],
    [0.00002438199, 3.60655644537, 316.3918696566],
    [0.00002804218, 4.8974259132, 103.0927742186],
    [0.00002990245, 0.80692155639, 2118.7638603784],
    [0.00001977572, 5.08915489088, 956.2891559706],
    [0.00001853679, 2.76941001747, 1596.1864422846],
    [0.000017728, 0.72631739446, 742.9900605326],
    [0.00001812965, 3.84602148747, 95.9792272178],
    [0.00001532945, 4.31556714501, 117.3198682202],
    [0.00001904067, 1.85937873703, 1581.959348283],
    [0.00001539212, 1.47899172821, 639.897286314],
    [0.00001632362, 1.41504212408, 1045.1548361876],
    [0.00001023812, 2.57182697715, 433.7117378768],
    [0.00001055422, 2.50844222977, 1265.5674786264],
    [0.00000981775, 2.18800022614, 220.4126424388],
    [0.00000940094, 1.34873014473, 625.6701923124],
    [0.00000839712, 6.20534871612, 942.062061969],
    [0.00000985733, 1.42746834265, 1169.5882514086],
    [0.00000778939, 5.49323533683, 309.2783226558],
    [0.00000765192, 1.96892067856, 1155.361157407],
    [0.00000643975, 4.25838784988, 213.299095438],
    [0.00000734378, 0.11449859192, 1162.4747044078],
    [0.00000538315, 4.2457528015, 853.196381752],
    [0.00000501903, 4.81386721508, 199.0720014364],
    [0.00000471426, 5.91213180419, 1692.1656695024],
    [0.00000499873, 3.02041735659, 330.6189636582],
    [0.00000383793, 2.17143854666, 1073.6090241908],
    [0.00000428181, 3.2006578449, 412.3710968744],
    [0.00000392314, 6.21042734222, 1478.8665740644],
    [0.00000312829, 2.9231361325, 838.9692877504],
    [0.00000349351, 1.4989840068, 728.762966531],
    [0.000002272, 2.73839039509, 508.3503240922],
    [0.000002446, 1.76024889748, 1272.6810256272],
    [0.00000228732, 2.84901766497, 1375.7737998458],
    [0.0000022154, 3.09819260401, 3.1813937377],
    [0.00000180779, 3.64990601644, 1368.660252845],
    [0.00000189492, 1.1574227092, 2648.454825473],
    [0.0000017394, 1.8532639085, 1062.5633239269],
    [0.00000160856, 3.0274460009, 519.3960243561],
    [0.0000014431, 2.08463794343, 1055.4497769261],
    [0.00000131314, 2.97898157385, 1258.4539316256],
    [0.00000125629, 3.31850855112, 1063.3140834523],
    [0.00000124852, 1.62031036516, 551.031606097],
    [0.00000125162, 1.31558469253, 539.9859058331],
    [0.00000146706, 2.72430580528, 1056.2005364515],
    [0.00000115911, 3.18147754305, 2125.8774073792],
    [0.0000011422, 2.05698914179, 227.5261894396],
    [0.0000014533, 6.08208734754, 1485.9801210652],
    [0.000001185, 5.96270592372, 3.9321532631],
    [0.00000103412, 2.02926761934, 2111.6503133776],
    [0.00000097462, 3.83581286214, 846.0828347512],
    [0.00000091984, 1.8594696442, 1699.2792165032],
    [0.00000096362, 5.70969597388, 302.164775655],
    [0.00000106938, 1.67885758408, 1574.8458012822],
    [0.00000082834, 1.28754708496, 440.8252848776],
    [0.00000102548, 3.17928973305, 21.3406410024],
    [0.00000078206, 5.09272772324, 525.0250986486],
    [0.00000074173, 1.57703912297, 647.0108333148],
    [0.00000074807, 5.52867791022, 534.3568315406],
    [0.00000058286, 3.06258933512, 831.8557407496],
    [0.00000060063, 6.23965180318, 2221.856634597],
    [0.00000066496, 2.2857123373, 1685.0521225016],
    [0.00000048729, 5.83820948966, 2008.557539159],
    [0.00000066589, 2.63398762312, 1795.258443721],
    [0.00000046409, 2.49832684365, 524.2743391232],
    [0.0000004943, 2.75657743547, 963.4027029714],
    [0.00000051891, 1.37538181177, 1038.0412891868],
    [0.00000045782, 1.84235881885, 535.107591066],
    [0.00000042922, 3.13241373771, 618.5566453116],
    [0.00000043686, 0.40678646559, 149.5631971346],
    [0.00000040582, 4.83057322611, 1382.8873468466],
    [0.00000052158, 1.52495763338, 750.1036075334],
    [0.00000037951, 1.27002779619, 511.5317178299],
    [0.00000047789, 1.24530112906, 1471.7530270636],
    [0.00000036522, 3.0850035834, 547.8502123593],
    [0.00000035243, 2.80118853832, 10.2949407385],
    [0.00000036868, 1.53995824219, 526.7702037878],
    [0.00000036602, 2.80095524257, 532.6117264014],
    [0.00000033063, 3.44141312814, 1361.5467058442],
    [0.00000030104, 6.00478725838, 934.9485149682],
    [0.00000030442, 4.1408637058, 124.433415221],
    [0.00000028717, 5.55056196782, 11.0457002639],
    [0.00000027353, 1.68214165849, 1802.3719907218],
    [0.00000025726, 2.44462088413, 1898.3512179396],
    [0.00000024775, 2.99327423605, 99.1606209555],
    [0.00000024465, 3.43667769249, 106.2741679563],
    [0.00000027711, 2.73274666064, 1788.1448967202],
    [0.00000025167, 1.80443503539, 540.7366653585],
    [0.00000029743, 3.09990944853, 1905.4647649404],
    [0.00000022193, 3.59193891077, 1148.2476104062],
    [0.00000018077, 3.92504571424, 909.8187330546],
    [0.00000017089, 2.56125911732, 1603.2999892854],
    [0.00000018419, 4.58300478299, 107.0249274817],
    [0.00000017538, 6.04152156093, 525.4981794006],
    [0.00000017368, 4.58219668177, 533.8837507886],
    [0.00000017453, 0.10706951113, 76.2660712756],
    [0.00000016173, 4.31252210992, 99.9113804809],
    [0.00000016078, 4.97197338359, 191.9584544356],
    [0.00000015126, 1.80831479432, 518.6452648307],
    [0.00000017546, 4.4161533817, 18.1592472647],
    [0.0000001485, 2.08396451995, 1049.0869894507],
    [0.00000017147, 0.44287741205, 88.865680217],
    [0.00000017783, 3.53337718893, 860.3099287528],
    [0.00000011491, 3.67205052579, 1891.2376709388],
    [0.00000014699, 2.8589676065, 337.732510659],
    [0.00000011691, 1.50110188157, 3178.1457905676],
    [0.00000011346, 1.83391533435, 2214.7430875962],
    [0.00000014283, 2.26128564985, 2104.5367663768],
    [0.00000010023, 2.79174731766, 422.6660376129],
    [0.00000012875, 1.46315002246, 721.6494195302],
    [0.00000011042, 4.75800287074, 604.4725636619],
    [0.00000009289, 4.01491024284, 423.4167971383],
    [0.00000010028, 5.51845350012, 497.4476361802],
    [0.00000010134, 2.26013428987, 1592.2542890215],
    [0.00000010955, 0.52903548097, 2015.6710861598],
    [0.00000008621, 3.75608139172, 1464.6394800628],
    [0.0000000885, 3.29541292431, 92.0470739547],
    [0.00000009289, 5.09598221617, 561.934294009],
    [0.00000008368, 2.53484402848, 1585.1407420207],
    [0.00000010898, 3.83394926407, 113.3877149571],
    [0.0000000787, 2.55424145833, 415.5524906121],
    [0.00000008445, 2.64652480598, 224.3447957019],
    [0.00000007458, 2.96758658527, 1677.9385755008],
    [0.00000008955, 5.92443010693, 454.9093665273],
    [0.00000007356, 1.90543398464, 39.3568759152],
    [0.00000007292, 2.69780941624, 429.7795846137],
    [0.00000007358, 3.64822485338, 2655.5683724738],
    [0.00000007628, 2.37923774129, 2001.4439921582],
    [0.0000000756, 1.34359191286, 636.7158925763],
    [0.00000007709, 3.65753468748, 405.2575498736],
    [0.0000000718, 1.56368302392, 629.6023455755],
    [0.0000000809, 2.8758055145, 1585.8915015461],
    [0.00000007334, 5.47944814706, 530.44172462],
    [0.00000007334, 5.14442280849, 528.9402055692],
    [0.0000000721, 2.24007083388, 2228.9701815978],
    [0.00000007847, 4.72291528075, 114.1384744825],
    [0.00000007507, 5.38482384423, 121.2520214833],
    [0.00000006935, 1.27046739712, 387.2413149608],
    [0.00000006688, 4.17557954417, 1251.3403846248],
    [0.00000006655, 1.15378992395, 1158.5425511447],
    [0.00000006413, 2.31530755529, 1159.2933106701],
    [0.00000006468, 0.83651032579, 1165.6560981455],
    [0.0000000644, 5.06323216925, 1048.3362299253],
    [0.00000006851, 0.22239992232, 953.1077622329],
    [0.00000006545, 0.10032284925, 635.9651330509],
    [0.00000006447, 4.23801997486, 983.1158589136],
    [0.00000006643, 3.42324584872, 430.5303441391],
    [0.00000005842, 2.07614752527, 1166.4068576709],
    [0.00000006784, 4.34848431124, 305.3461693927],
    [0.00000005581, 1.66588046535, 70.8494453042],
    [0.00000006118, 2.69445341538, 312.4597163935],
    [0.00000005591, 1.91033760807, 234.6397364404],
    [0.00000006009, 0.10875806681, 1041.2226829245],
    [0.00000005973, 2.76152635468, 319.5732633943],
    [0.00000005278, 3.39197523571, 1781.0313497194],
    [0.00000005231, 3.55048876434, 2207.6295405954],
    [0.00000005519, 3.64099685042, 1593.0050485469],
    [0.0000000566, 6.06138104148, 2538.2485042536],
    [0.00000005189, 0.9184095151, 447.9388318784],
    [0.00000005286, 4.46265843793, 505.3119427064],
    [0.00000005917, 4.12240105946, 458.8415197904],
    [0.00000005612, 4.41336085972, 437.6438911399],
    [0.00000004972, 6.1612127884, 554.0699874828],
    [0.00000005942, 3.32585192349, 512.2824773553],
    [0.00000004807, 1.83942358294, 494.2662424425],
    [0.00000005306, 1.69049375604, 1069.6768709277],
    [0.00000005203, 1.8796267814, 498.6714764576],
    [0.00000004397, 2.50129326038, 565.1156877467],
    [0.00000006007, 0.30197494591, 2751.5475996916],
    [0.00000004326, 2.93617118935, 672.1406152284],
    [0.00000004605, 0.94900742336, 679.2541622292],
    [0.00000004812, 2.46105930646, 560.7104537316],
    [0.00000004305, 3.17292574823, 1070.4276304531],
    [0.00000004781, 0.23036668649, 600.5404103988],
    [0.00000004318, 0.82050097893, 81.7521332162],
    [0.00000004623, 6.18646661174, 621.7380390493],
    [0.00000004556, 0.84893193977, 628.8515860501],
    [0.00000004227, 2.61562626792, 2420.9286360334],
    [0.00000004148, 1.91466045368, 1080.7225711916],
    [0.00000004125, 1.85635315002, 643.8294395771],
    [0.00000005306, 5.45486105892, 210.1177017003],
    [0.00000003845, 1.59767120137, 970.5162499722],
    [0.00000003898, 5.93876139914, 1064.0477966352],
    [0.00000003888, 1.98395494204, 2641.3412784722],
    [0.00000003853, 2.5948558243, 2317.8358618148],
    [0.00000003908, 1.83944904776, 746.9222137957],
    [0.0000000388, 5.29549605002, 504.561183181],
    [0.00000003963, 5.18427227117, 952.3570027075],
    [0.0000000397, 2.21423593745, 32.2433289144],
    [0.00000003965, 1.33979462564, 501.3797894433],
    [0.00000005052, 0.57298078948, 945.9942152321],
    [0.00000004516, 1.67475369251, 757.2171545342],
    [0.00000003643, 5.32837517943, 554.8207470082],
    [0.00000004896, 5.94004053227, 295.0512286542],
    [0.00000003693, 3.00089138383, 558.0021407459],
    [0.0000000336, 2.96000036043, 501.2367770914],
    [0.00000003474, 1.76083171276, 739.8086667949],
    [0.00000003343, 1.48999871352, 835.0371344873],
    [0.00000004224, 0.94453455733, 547.0994528339],
    [0.00000003838, 3.19193946437, 1493.093668066],
    [0.00000003214, 6.21072812865, 498.1983957056],
    [0.00000003222, 5.31735340028, 1912.5783119412],
    [0.00000003189, 6.02323544876, 217.2312487011],
    [0.00000003147, 0.44530277934, 654.1243803156],
    [0.000000035, 2.37701863527, 2428.0421830342],
    [0.00000003525, 3.81209327046, 611.4430983108],
    [0.00000003077, 3.68524717885, 416.3032501375],
    [0.00000003344, 3.60197619452, 6275.9623029906],
    [0.00000002969, 4.41314329134, 561.1835344836],
    [0.00000002931, 2.79773576105, 1994.3304451574],
    [0.00000003252, 3.05737388484, 6290.1893969922],
    [0.00000003128, 5.02441385652, 10206.1719992102],
    [0.00000002968, 2.52815042649, 597.3590166611],
    [0.00000003023, 5.26037767653, 938.1299087059],
    [0.00000003194, 2.85805260634, 483.2205421786],
    [0.00000002931, 1.32592672247, 2531.1349572528],
    [0.00000003496, 5.37662649242, 1054.7160637432],
    [0.00000002705, 1.50683837108, 960.2213092337],
    [0.00000002701, 1.08016229894, 1151.4290041439],
    [0.00000003042, 4.48040916474, 10220.3990932118],
    [0.0000000272, 2.58010430587, 326.6868103951],
    [0.00000002672, 1.963246964, 521.8266585684],
    [0.00000002672, 2.37743868437, 537.5552716208],
    [0.00000002609, 3.40770814407, 2524.021410252],
    [0.00000002658, 2.71532856876, 1061.829610744],
    [0.00000002848, 2.92219851331, 1176.7017984094],
    [0.00000002545, 0.06404673008, 1098.7388061044],
    [0.00000002658, 0.64454112605, 1056.9342496344],
    [0.00000003075, 1.56267675985, 462.0229135281],
    [0.00000002804, 1.45329267833, 576.1613880106],
    [0.00000003006, 2.08663728044, 230.5645708254],
    [0.0000000297, 5.26157678617, 203.0041546995],
    [0.00000002663, 3.13863396084, 824.7421937488],
    [0.00000002292, 5.42244624952, 2324.9494088156],
    [0.0000000233, 4.18275377368, 849.2642284889],
    [0.00000002249, 3.18215049762, 2097.423219376],
    [0.00000002829, 4.3932572216, 320.3240229197],
    [0.00000002226, 2.97616162753, 380.12776796],
    [0.00000002199, 4.91006707252, 945.2434557067],
    [0.0000000216, 2.62271075267, 2737.32050569],
    [0.00000002256, 2.98060305636, 1053.9653042178],
    [0.00000002189, 4.68502028534, 1514.2912967165],
    [0.00000002506, 1.90878749378, 2332.0629558164],
    [0.00000002183, 3.6910397927, 209.3669421749],
    [0.00000002373, 5.64858628759, 523.4711899711],
    [0.00000002373, 4.97528466796, 535.9107402181],
    [0.00000002105, 3.22262200918, 1059.3337460794],
    [0.00000002032, 2.74059165682, 988.532484885],
    [0.00000002025, 5.26102962114, 327.4375699205],
    [0.00000002181, 3.78829926257, 202.2533951741],
    [0.00000001997, 1.58652319342, 504.4181708291],
    [0.00000002033, 2.03689822537, 1173.5204046717],
    [0.00000002284, 2.68820291737, 528.0464336919],
    [0.00000002284, 1.652482731, 531.3354964973],
    [0.00000002212, 4.99825994629, 5230.807466803],
    [0.00000002084, 5.36574627296, 490.3340891794],
    [0.00000002111, 3.74188087574, 195.1398481733],
    [0.0000000202, 4.84607190143, 567.8240007324],
    [0.00000001939, 2.20836538491, 1064.7985561606],
    [0.00000001956, 3.61372537932, 46.470422916],
    [0.00000001905, 3.51155751559, 1077.5411774539],
    [0.00000001874, 2.75416274578, 554.9637593601],
    [0.00000002388, 4.22825715289, 334.5511169213],
    [0.00000002112, 5.51830153786, 5216.5803728014],
    [0.00000002086, 3.31238187572, 1062.302691496],
    [0.0000000183, 2.12262660621, 2634.2277314714],
    [0.00000002057, 0.13888894147, 9161.0171630226],
    [0.00000001936, 4.17140698368, 1884.124123938],
    [0.00000001891, 5.26006489638, 569.0478410098],
    [0.00000001776, 4.34086986629, 842.1506814881],
    [0.00000001855, 5.80189856282, 491.5579294568],
    [0.00000001763, 6.19379186456, 67.6680515665],
    [0.00000002283, 0.85697379379, 74.7815985673],
    [0.00000001966, 0.65769985595, 9146.790069021],
    [0.00000001805, 2.09255580554, 460.5384408198],
    [0.00000001899, 1.20368030266, 142.4496501338],
    [0.00000001684, 2.53973560527, 598.8434893694],
    [0.00000001666, 6.08661752005, 1058.4187223427],
    [0.00000002105, 0.13724782964, 1059.430114299],
    [0.00000001627, 3.04780369614, 2840.4132799086],
    [0.00000001637, 2.20216107241, 732.6951197941],
    [0.00000001639, 0.62227037776, 739.0579072695],
    [0.00000001794, 5.54837558325, 1279.794572628],
    [0.0000000191, 5.80717048495, 760.25553592],
    [0.00000001612, 4.46225131237, 1354.4331588434],
    [0.0000000162, 2.24777212731, 1364.7280995819],
    [0.00000001633, 3.33686843456, 2435.155730035],
    [0.00000001521, 5.37680802629, 842.9014410135],
    [0.00000001513, 2.9686119992, 1269.4996318895],
    [0.00000001437, 1.72233118576, 1056.4611688824],
    [0.00000001981, 4.69659063605, 1141.1340634054],
    [0.00000001666, 3.55643756155, 1060.3451380357],
    [0.00000001646, 4.8904305473, 299.1263942692],
    [0.00000001687, 2.00212693898, 2744.4340526908],
    [0.00000001879, 3.27103722365, 528.2064923863],
    [0.00000001879, 1.06964842472, 531.1754378029],
    [0.00000001377, 3.51081916344, 916.9322800554],
    [0.00000001706, 0.13943133227, 724.8308132679],
    [0.00000001498, 5.40290721741, 1134.1635287565],
    [0.0000000141, 0.2581396916, 1091.6252591036],
    [0.00000001353, 3.04515689504, 2413.8150890326],
    [0.0000000152, 0.66505874837, 977.4867846211],
    [0.000000013, 0.76466874907, 1474.9344208013],
    [0.00000001548, 3.01770323711, 2310.722314814],
    [0.00000001517, 3.22669470964, 1439.5096981492],
    [0.00000001308, 1.16467021028, 558.1451530978],
    [0.00000001366, 4.72026364382, 1446.62324515],
    [0.00000001435, 0.26722898141, 991.7138786227],
    [0.00000001177, 2.17439866083, 3053.7123753466],
    [0.00000001147, 2.74061646897, 408.4389436113],
    [0.00000001144, 0.57869563945, 1482.0479678021],
    [0.00000001323, 0.4530079806, 284.1485407422],
    [0.00000001231, 0.91254979843, 373.0142209592],
    [0.00000001132, 5.19504872814, 1063.5747158832],
    [0.00000001079, 1.8315750655, 1482.7987273275],
    [0.00000001252, 1.06007460213, 473.068613792],
    [0.00000001242, 2.96234986087, 520.129737539],
    [0.00000001242, 4.51992844109, 539.2521926502],
    [0.00000001048, 1.97860689481, 2950.619601128],
    [0.00000001059, 6.01027410215, 2854.6403739102],
    [0.0000000103, 5.35593869278, 850.0149880143],
    [0.00000001166, 3.23409430529, 2758.6611466924],
    [0.00000000984, 1.94169871699, 536.8526962052],
    [0.00000000984, 5.54057958497, 522.529233984],
    [0.00000001015, 0.51818482403, 450.9772132642],
    [0.00000001121, 0.67312913777, 4164.311989613],
    [0.00000001046, 3.94166736589, 2200.5159935946],
    [0.0000000099, 2.88057760564, 1969.2006632438],
    [0.00000001126, 3.2306942269, 586.3133163972],
    [0.0000000104, 4.01217628215, 5223.6939198022],
    [0.0000000091, 2.32349805206, 1578.7779545453],
    [0.00000000901, 2.95403610944, 248.7238180901],
    [0.00000001017, 2.10338420584, 8094.5216858326],
    [0.00000001003, 5.2118465456, 1432.3961511484],
    [0.00000000984, 2.45520540542, 522.6256022036],
    [0.00000000984, 5.02707289654, 536.7563279856],
    [0.00000000868, 2.78712117765, 3156.8051495652],
    [0.00000000868, 2.83878055329, 622.4887985747],
    [0.00000000981, 5.3167463557, 9153.9036160218],
    [0.00000000825, 3.55062206532, 4856.0843660684],
    [0.00000000891, 1.62041956584, 486.4019359163],
    [0.00000000823, 3.64278599579, 5746.271337896],
    [0.00000000807, 1.70410389099, 1792.0770499833],
    [0.00000000806, 0.49831886253, 1791.3262904579],
    [0.00000000832, 3.8225036691, 608.404716925],
    [0.00000000825, 0.24972568677, 8617.0991039264],
    [0.00000000871, 2.99417344584, 2730.2069586892],
    [0.00000000797, 5.51455791977, 4649.8988176312],
    [0.00000000767, 2.28430672508, 3810.9295298808],
    [0.0000000081, 0.45334517048, 3067.9394693482],
    [0.00000000801, 1.48516614896, 77204.32749453338],
    [0.00000000914, 5.99476383093, 155.7829722581],
    [0.00000000779, 2.12132825556, 521.6142102473],
    [0.00000000779, 5.3609500464, 537.7677199419],
    [0.00000000754, 0.53379104114, 8631.326197928],
    [0.00000000758, 5.06316213675, 9676.4810341156],
    [0.00000000926, 4.6929397633, 298.2326223919],
    [0.00000000743, 5.0691445109, 1059.903195051],
    [0.00000000744, 0.87700319351, 277.0349937414],
    [0.0000000078, 0.67747505651, 605.9570363702],
    [0.00000000799, 2.72026694542, 572.9799942729],
    [0.00000000802, 3.92779096672, 984.6003316219],
    [0.00000000788, 4.88134713728, 1670.8250285],
    [0.00000000956, 0.73411529838, 2847.5268269094],
    [0.0000000085, 3.90109777168, 775.233389447],
    [0.00000000907, 4.00563772299, 453.424893819],
    [0.00000000761, 4.74587054848, 902.7051860538],
    [0.00000000975, 5.83114964136, 313.2104759189],
    [0.00000000739, 5.82131571871, 967.3348562345],
    [0.00000000697, 1.6921157448, 2545.3620512544],
    [0.00000000696, 1.84682173451, 1475.6851803267],
    [0.00000000684, 0.30762745277, 1798.4398374587],
    [0.000000007, 4.5273624919, 487.1526954417],
    [0.000000007, 6.09650846364, 572.2292347475],
    [0.00000000667, 0.87586274198, 1012.9115072732],
    [0.00000000792, 3.22181109709, 1262.3860848887],
    [0.00000000788, 0.82832429041, 100.6450936638],
    [0.00000000679, 3.67930441077, 24498.8302462904],
    [0.00000000729, 0.09481854817, 4546.8060434126],
    [0.00000000649, 1.06732867372, 245.5424243524],
    [0.0000000065, 1.56301053281, 1799.1905969841],
    [0.00000000704, 0.42034860657, 5165.3626887242],
    [0.00000000702, 6.27548233256, 5062.2699145056],
    [0.00000000652, 6.25127555163, 306.0969289181],
    [0.00000000709, 4.78603512197, 5069.3834615064],
    [0.00000000703, 3.68343139414, 2274.1169495098],
    [0.00000000702, 3.18123565462, 2288.3440435114],
    [0.00000000716, 0.63230188605, 3281.2385647862],
    [0.00000000762, 6.25728499618, 105.5404547734],
    [0.0000000059, 1.92983261613, 3370.1042450032],
    [0.00000000764, 5.2877329145, 927.8349679674],
    [0.00000000581, 2.81040248536, 827.9235874865],
    [0.00000000606, 5.48599368984, 1751.539531416],
    [0.00000000779, 1.60782156712, 535.8413042489],
    [0.00000000779, 5.87445673484, 523.5406259403],
    [0.00000000576, 6.06778398672, 4738.7644978482],
    [0.00000000607, 2.92319803825, 2132.99095438],
    [0.00000000733, 3.02690447783, 2627.1141844706],
    [0.0000000058, 5.69157256422, 731.9443602687],
    [0.00000000744, 1.33560210315, 643.0786800517],
    [0.00000000602, 0.50423273015, 398.1440028728],
    [0.00000000648, 1.82180695593, 3060.8259223474],
    [0.0000000072, 3.06017179586, 3075.053016349],
    [0.00000000622, 0.92043275035, 4525.4654024102],
    [0.00000000573, 1.26294752508, 394.3548619616],
    [0.00000000634, 1.38493182347, 469.8872200543],
    [0.00000000559, 2.49823686446, 444.7574381407],
    [0.00000000567, 0.6202915948, 1887.3055176757],
    [0.00000000564, 4.09051331205, 1127.0499817557],
    [0.00000000657, 5.16807539099, 3995.7744373156],
    [0.00000000547, 2.00121500235, 4127.3213995374],
    [0.00000000623, 1.38117358736, 25035.6347583858],
    [0.00000000545, 1.38456766312, 810.6581120991],
    [0.00000000729, 0.24565368997, 1289.9465010146],
    [0.00000000616, 1.88334661601, 25021.4076643842],
    [0.00000000537, 3.4227001862, 782.3469364478],
    [0.00000000563, 1.7918130295, 1268.7488723641],
    [0.00000000541, 3.465078297, 2516.9078632512],
    [0.00000000744, 4.03452208325, 1819.6374661092],
    [0.00000000539, 1.69741893503, 614.6244920485],
    [0.00000000543, 4.69775845546, 216.4804891757],
    [0.00000000534, 1.45755614268, 436.8931316145],
    [0.00000000499, 2.90337229496, 1688.9842757647],
    [0.00000000493, 5.43215643529, 10021.8372800994],
    [0.00000000582, 4.20670081791, 1457.525933062],
    [0.00000000546, 2.95575551132, 589.4947101349],
    [0.00000000509, 5.07096917753, 4686.8894077068],
    [0.000000005, 3.11018805781, 4326.3934009738],
    [0.00000000477, 5.37668884763, 4966.2906872878],
    [0.00000000505, 1.780939174, 754.0357607965],
    [0.00000000521, 0.81875815114, 69.1525242748],
    [0.00000000609, 4.73260137898, 1560.6187072806],
    [0.00000000467, 2.49269095853, 3473.1970192218],
    [0.00000000469, 1.79243927804, 3267.0114707846],
    [0.00000000507, 3.49288215577, 2090.3096723752],
    [0.00000000462, 2.57741672207, 3466.083472221],
    [0.00000000457, 1.44246135943, 2108.4689196399],
    [0.00000000477, 6.23689806796, 3171.0322435668],
    [0.00000000451, 0.27095202106, 2107.7181601145],
    [0.0000000045, 0.66226303752, 1467.8208738005],
    [0.00000000524, 0.13691906753, 1578.0271950199],
    [0.00000000528, 1.20887479542, 3693.6096616606],
    [0.00000000451, 3.3156330777, 5172.476235725],
    [0.00000000467, 1.66982290376, 1489.9122743283],
    [0.00000000462, 0.76919542272, 26617.5941066688],
    [0.00000000432, 5.44107510264, 4701.1165017084],
    [0.00000000452, 4.81735477031, 1550.939859646],
    [0.00000000423, 5.02783018119, 2957.7331481288],
    [0.00000000416, 1.52081652739, 1261.6353253633],
    [0.00000000423, 4.52662522567, 415.2918581812],
    [0.00000000448, 2.57393421443, 12036.4607348882],
    [0.00000000514, 0.65565842899, 3252.784376783],
    [0.00000000424, 1.74534057669, 1254.5217783625],
    [0.00000000487, 0.27721159194, 1901.5326116773],
    [0.00000000513, 4.18308593899, 1809.4855377226],
    [0.00000000396, 3.86752813124, 1020.025054274],
    [0.00000000413, 2.47786986764, 1902.2833712027],
    [0.00000000438, 1.11008336467, 611.5861106627],
    [0.00000000404, 3.24709914624, 2042.4977891028],
    [0.00000000412, 6.18093909521, 4863.1979130692],
    [0.00000000379, 1.72795584183, 4443.713269194],
    [0.00000000402, 3.20546587206, 665.0270682276],
    [0.00000000526, 1.28579140279, 3377.217792004],
    [0.00000000409, 2.96470929082, 1357.6145525811],
    [0.00000000453, 4.96226113717, 4319.279853973],
];

const X2: &[Term] = &[
    [0.00123864644, 4.13563277513, 522.5774180938],
    [0.00121521296, 0.21155109275, 536.8045120954],
    [0.00085355503, 0.0, 0.0],
    [0.00077685547, 5.29776154458, 529.6909650946],
    [0.00041410887, 5.12291589939, 1059.3819301892],
    [0.0001142307, 1.72917878238, 7.1135470008],
    [0.00007051587, 0.74163703419, 1066.49547719],
    [0.00005711029, 3.63172846494, 1052.2683831884],
    [0.00005242644, 4.27482379441, 515.463871093],
    [0.0000403954, 5.58417732117, 1589.0728952838],
    [0.00003706457, 0.07769981349, 543.9180590962],
    [0.00001698817, 2.44284418066, 110.2063212194],
    [0.00001134598, 2.35807061809, 426.598190876],
    [0.00001322673, 1.6314254998, 14.2270940016],
    [0.00000888203, 4.66627290244, 526.5095713569],
    [0.00000865547, 5.95596888539, 532.8723588323],
    [0.00000822579, 1.96473995078, 632.7837393132],
    [0.00000994008, 1.46985522253, 323.5054166574],
    [0.00000574066, 1.66926588148, 949.1756089698],
    [0.00000733386, 0.37132887987, 103.0927742186],
    [0.00000571711, 3.16912095909, 1045.1548361876],
    [0.00000514256, 5.97103330686, 525.7588118315],
    [0.00000512225, 4.6553500001, 533.6231183577],
    [0.0000059593, 2.85993171505, 735.8765135318],
    [0.00000458533, 1.24450068286, 1596.1864422846],
    [0.00000419126, 2.61042238424, 117.3198682202],
    [0.0000037484, 5.55821526471, 95.9792272178],
    [0.00000341765, 0.39491407125, 206.1855484372],
    [0.00000332926, 6.00008752152, 2118.7638603784],
    [0.00000294743, 4.41871274898, 419.4846438752],
    [0.00000282018, 3.7109826237, 1581.959348283],
    [0.00000264464, 3.68007673744, 956.2891559706],
    [0.00000225624, 1.67501674489, 942.062061969],
    [0.00000221808, 0.88408008289, 433.7117378768],
    [0.00000225587, 3.0353034598, 625.6701923124],
    [0.0000020442, 0.47807959065, 220.4126424388],
    [0.0000019675, 6.00388890575, 1169.5882514086],
    [0.00000196048, 5.98648295745, 639.897286314],
    [0.00000164833, 5.35422849201, 316.3918696566],
    [0.00000163628, 0.52534435976, 1073.6090241908],
    [0.00000160814, 3.59856351339, 1155.361157407],
    [0.00000137153, 4.4413058415, 508.3503240922],
    [0.00000137429, 0.24727364545, 199.0720014364],
    [0.00000170296, 1.32514412307, 330.6189636582],
    [0.00000116446, 5.49080485025, 742.9900605326],
    [0.00000105301, 2.68783089944, 853.196381752],
    [0.00000104117, 0.79163400573, 309.2783226558],
    [0.00000121829, 3.11437651993, 728.762966531],
    [0.00000118326, 2.48566246801, 213.299095438],
    [0.00000107997, 4.63298682919, 1162.4747044078],
    [0.00000075826, 4.23522954977, 1265.5674786264],
    [0.00000074749, 6.19154062961, 551.031606097],
    [0.00000103302, 4.83833077255, 412.3710968744],
    [0.00000085092, 4.83054979229, 519.3960243561],
    [0.00000057862, 4.11025319311, 838.9692877504],
    [0.00000067576, 5.76690496135, 539.9859058331],
    [0.00000055783, 1.31452072722, 3.1813937377],
    [0.00000055764, 1.46046269932, 21.3406410024],
    [0.00000046659, 0.35544852319, 227.5261894396],
    [0.00000048874, 0.17659043471, 1062.5633239269],
    [0.0000003808, 5.82052820462, 440.8252848776],
    [0.00000037163, 4.52114626619, 1258.4539316256],
    [0.00000036486, 4.74328055858, 1692.1656695024],
    [0.00000031826, 1.72176295859, 2125.8774073792],
    [0.00000036512, 4.40434241068, 1056.2005364515],
    [0.00000039239, 1.829241158, 846.0828347512],
    [0.00000038446, 3.35522807244, 1574.8458012822],
    [0.0000002857, 0.33181498895, 1055.4497769261],
    [0.00000031863, 0.28733457947, 1272.6810256272],
    [0.00000028626, 3.10372853509, 1038.0412891868],
    [0.00000029754, 4.784922319, 1485.9801210652],
    [0.00000032377, 1.11981589204, 302.164775655],
    [0.00000028363, 5.40366732937, 1368.660252845],
    [0.0000002207, 4.81227665763, 618.5566453116],
    [0.00000025133, 0.11303788219, 2648.454825473],
    [0.00000022232, 4.51344471821, 831.8557407496],
    [0.00000019785, 4.88687522199, 1063.3140834523],
    [0.00000020494, 0.25456467022, 1699.2792165032],
    [0.00000020382, 6.10298854587, 647.0108333148],
    [0.00000018023, 2.01547726194, 1478.8665740644],
    [0.00000017438, 1.50924623831, 1375.7737998458],
    [0.00000015148, 2.49185231073, 1471.7530270636],
    [0.00000012898, 1.52125178978, 934.9485149682],
    [0.00000014148, 2.42700106368, 124.433415221],
    [0.00000012497, 1.06412961453, 10.2949407385],
    [0.00000011227, 3.16762334982, 511.5317178299],
    [0.00000012698, 4.01915577164, 1685.0521225016],
    [0.00000012646, 1.06991868745, 963.4027029714],
    [0.00000010726, 1.17306244783, 547.8502123593],
    [0.00000012491, 5.98319150499, 750.1036075334],
    [0.00000013409, 3.85947629258, 2111.6503133776],
    [0.00000010421, 5.2480703076, 1361.5467058442],
    [0.00000009114, 3.32104919206, 1382.8873468466],
    [0.00000007503, 0.95949306974, 1603.2999892854],
    [0.00000007669, 0.38211083277, 191.9584544356],
    [0.00000006803, 1.42920029674, 106.2741679563],
    [0.00000008018, 1.16417082031, 337.732510659],
    [0.0000000718, 2.21396651005, 88.865680217],
    [0.00000007501, 3.11940992015, 721.6494195302],
    [0.00000006351, 5.09436133175, 1148.2476104062],
    [0.00000005564, 5.17318738796, 2221.856634597],
    [0.00000005389, 4.48913154375, 1795.258443721],
    [0.00000006397, 1.92635814327, 860.3099287528],
    [0.00000005015, 6.16326208043, 99.9113804809],
    [0.00000005511, 3.96940469989, 1049.0869894507],
    [0.00000003926, 3.73297185232, 497.4476361802],
    [0.00000003787, 0.01979379406, 1802.3719907218],
    [0.0000000362, 0.60771427323, 561.934294009],
    [0.0000000442, 4.29333151498, 1788.1448967202],
    [0.00000003522, 4.6666357179, 501.2367770914],
    [0.00000003402, 0.16878191367, 234.6397364404],
    [0.00000003331, 5.40237223569, 405.2575498736],
    [0.0000000377, 2.00527081129, 113.3877149571],
    [0.00000003174, 5.47700265929, 447.9388318784],
    [0.00000003729, 0.35216371388, 107.0249274817],
    [0.00000003156, 4.93060391319, 1898.3512179396],
    [0.00000002747, 2.61017641134, 81.7521332162],
    [0.00000002754, 0.98877084312, 429.7795846137],
    [0.00000003501, 6.1890795899, 1069.6768709277],
    [0.00000002669, 5.59693909051, 2015.6710861598],
    [0.00000002955, 0.62556987115, 1592.2542890215],
    [0.00000002539, 5.60494624351, 1251.3403846248],
    [0.00000002751, 3.6436999549, 2104.5367663768],
    [0.00000002422, 1.17292415415, 99.1606209555],
    [0.00000002352, 5.40279513389, 149.5631971346],
    [0.00000002434, 0.16399596747, 1080.7225711916],
    [0.00000002663, 1.77758930291, 1905.4647649404],
    [0.00000002284, 3.36988966035, 629.6023455755],
    [0.00000002223, 0.93651582782, 422.6660376129],
    [0.00000002155, 5.42100782463, 1464.6394800628],
    [0.00000002661, 1.33519838774, 295.0512286542],
    [0.00000002234, 5.28790890289, 6275.9623029906],
    [0.00000002232, 1.36343792387, 6290.1893969922],
    [0.00000002164, 5.07920518204, 1891.2376709388],
    [0.0000000206, 2.18476646961, 2655.5683724738],
    [0.00000002104, 4.53279660231, 2008.557539159],
    [0.00000002124, 5.77020243349, 423.4167971383],
    [0.00000001981, 4.32983209849, 2001.4439921582],
    [0.00000002094, 4.87667281813, 1677.9385755008],
    [0.00000002075, 0.42762472762, 10206.1719992102],
    [0.00000002073, 2.78634226074, 10220.3990932118],
    [0.00000001764, 6.26231949488, 970.5162499722],
    [0.00000002193, 5.51580717812, 611.4430983108],
    [0.00000001815, 5.85865045451, 558.1451530978],
    [0.00000001804, 4.1400207771, 1159.2933106701],
    [0.00000001819, 5.36199924969, 1165.6560981455],
    [0.00000001797, 0.77606737878, 1585.1407420207],
    [0.00000001719, 4.75202956126, 654.1243803156],
    [0.00000001746, 4.42489693081, 1585.8915015461],
    [0.00000001558, 4.80177953016, 635.9651330509],
    [0.00000001782, 0.60447629298, 3178.1457905676],
    [0.00000001753, 0.13075072508, 757.2171545342],
    [0.00000001617, 4.66091090554, 824.7421937488],
    [0.00000001466, 4.76542718595, 2214.7430875962],
    [0.00000001548, 2.35342818787, 945.9942152321],
    [0.00000001383, 3.30194862701, 5230.807466803],
    [0.00000001381, 0.94385809616, 5216.5803728014],
    [0.00000001392, 4.04527512446, 1279.794572628],
    [0.00000001441, 1.00970871891, 2228.9701815978],
    [0.00000001266, 5.08490219855, 1781.0313497194],
    [0.00000001255, 1.29272209924, 210.1177017003],
    [0.00000001198, 0.79239741189, 326.6868103951],
    [0.0000000122, 0.92941284572, 319.5732633943],
    [0.0000000127, 4.72493577444, 9161.0171630226],
    [0.00000001268, 2.36685858376, 9146.790069021],
    [0.00000001183, 3.25891705713, 636.7158925763],
    [0.00000001183, 5.27685280136, 416.3032501375],
    [0.00000001176, 3.08811914225, 732.6951197941],
    [0.00000001052, 2.44181827362, 1493.093668066],
    [0.00000001351, 2.15891576495, 5223.6939198022],
    [0.00000001063, 1.90543102461, 518.6452648307],
    [0.00000001063, 5.57684727735, 540.7366653585],
    [0.00000000985, 4.92073956203, 2207.6295405954],
    [0.00000001201, 5.73229340019, 3281.2385647862],
    [0.00000000932, 3.38783806769, 952.3570027075],
    [0.00000000923, 5.20698767018, 909.8187330546],
    [0.00000001036, 1.44078543733, 5753.3848848968],
    [0.00000001019, 0.26639453048, 1141.1340634054],
    [0.00000000905, 5.45847375728, 1158.5425511447],
    [0.00000001118, 3.04402958717, 1912.5783119412],
    [0.00000001183, 2.13753562284, 953.1077622329],
    [0.00000000889, 3.32588521405, 739.8086667949],
    [0.00000000955, 2.85800828226, 9683.5945811164],
    [0.00000000966, 5.05194792689, 2324.9494088156],
    [0.00000000842, 2.38621599276, 3789.5888888784],
    [0.00000001017, 4.89635261381, 1994.3304451574],
    [0.00000000869, 3.35288494645, 3590.516887442],
    [0.00000001069, 4.17138356606, 2943.5060541272],
    [0.00000000935, 0.84952544347, 203.0041546995],
    [0.0000000079, 4.03005346383, 1166.4068576709],
    [0.00000000758, 4.87817386642, 2531.1349572528],
    [0.00000000958, 4.54298568578, 3384.3313390048],
    [0.00000000757, 4.20699802776, 2317.8358618148],
    [0.00000000721, 2.30689818779, 4694.0029547076],
    [0.00000000722, 2.13548601248, 3370.1042450032],
    [0.00000000989, 0.16818876297, 6283.0758499914],
    [0.00000000703, 1.95208563709, 2545.3620512544],
    [0.00000000746, 5.75469098902, 1884.124123938],
    [0.00000000723, 2.2621771325, 1809.4855377226],
    [0.00000000819, 2.75819868566, 3693.6096616606],
    [0.00000000822, 3.23378371026, 3899.7952100978],
    [0.00000000656, 3.72870387447, 8624.2126509272],
    [0.0000000083, 3.53694241133, 3576.2897934404],
    [0.00000000859, 6.02317529595, 458.8415197904],
    [0.00000000751, 5.49597800302, 3597.6304344428],
    [0.00000000785, 5.66207723066, 1354.4331588434],
    [0.00000000781, 2.87341818659, 3796.7024358792],
    [0.00000000649, 4.07754073257, 2634.2277314714],
    [0.00000000624, 4.91001561798, 2097.423219376],
    [0.00000000604, 4.91506070132, 2524.021410252],
    [0.00000000661, 3.32507275831, 3583.4033404412],
    [0.00000000613, 4.18463336751, 2420.9286360334],
    [0.00000000771, 0.75516833087, 927.8349679674],
    [0.00000000595, 5.08004072652, 76.2660712756],
    [0.00000000709, 4.55137735674, 2310.722314814],
    [0.00000000716, 4.35697491108, 2641.3412784722],
    [0.00000000689, 4.67112827665, 2730.2069586892],
    [0.0000000071, 4.40966446328, 3803.81598288],
    [0.00000000754, 4.24897175357, 3700.7232086614],
    [0.0000000075, 1.82437535078, 3149.6916025644],
    [0.00000000761, 3.61383842024, 9153.9036160218],
    [0.00000000566, 1.70094279377, 2861.753920911],
    [0.00000000719, 4.60069795363, 600.5404103988],
    [0.00000000546, 2.4483770269, 437.6438911399],
    [0.0000000061, 5.65650173973, 1457.525933062],
    [0.00000000725, 3.32732372233, 1567.7322542814],
    [0.00000000734, 5.24445337821, 1670.8250285],
    [0.00000000744, 4.46861753073, 2627.1141844706],
    [0.00000000588, 5.02282873225, 430.5303441391],
    [0.0000000051, 1.74932088901, 209.3669421749],
    [0.0000000057, 5.37315037594, 2538.2485042536],
    [0.00000000637, 4.8829544852, 1987.2168981566],
    [0.00000000588, 3.76574616668, 3259.8979237838],
    [0.00000000485, 4.91636058546, 2847.5268269094],
    [0.00000000517, 4.44267372013, 2303.6087678132],
    [0.00000000608, 4.88795893503, 3487.4241132234],
    [0.00000000495, 3.13813345098, 3906.9087570986],
    [0.00000000433, 1.89231240325, 621.7380390493],
    [0.0000000053, 2.58988239071, 547.0994528339],
    [0.0000000053, 4.89239591125, 512.2824773553],
    [0.00000000431, 4.69077182076, 2833.2997329078],
    [0.00000000537, 3.26379180918, 3892.681663097],
    [0.00000000478, 5.07132599131, 1593.0050485469],
    [0.00000000574, 0.1541705448, 2332.0629558164],
    [0.00000000521, 3.03066760362, 4216.1870797544],
    [0.00000000458, 5.60104673426, 628.8515860501],
    [0.00000000438, 5.4935502016, 2200.5159935946],
    [0.00000000527, 6.21147753215, 462.0229135281],
    [0.00000000527, 4.4123934234, 597.3590166611],
    [0.00000000506, 0.50101883015, 1244.226837624],
    [0.0000000045, 5.30692494677, 3914.0223040994],
    [0.00000000511, 6.03746722439, 643.0786800517],
    [0.00000000431, 2.42209558244, 849.2642284889],
    [0.00000000453, 2.50871933627, 4010.0015313172],
    [0.00000000412, 1.4853392213, 2758.6611466924],
];

const X3: &[Term] = &[
    [0.00017071323, 5.86133022278, 522.5774180938],
    [0.00016713548, 4.77458794485, 536.8045120954],
    [0.0000334861, 0.0, 0.0],
    [0.00001787838, 3.56550298031, 1059.3819301892],
    [0.00001435449, 5.98502036587, 515.463871093],
    [0.00001080194, 5.42530305914, 1066.49547719],
    [0.00001014206, 4.64773902077, 543.9180590962],
    [0.00001073175, 6.22314467964, 7.1135470008],
    [0.00000711065, 5.50680515205, 1052.2683831884],
    [0.00000261089, 4.28269834394, 1589.0728952838],
    [0.00000301054, 6.1984132109, 14.2270940016],
    [0.00000134738, 4.94746197927, 1045.1548361876],
    [0.0000012429, 0.37523072266, 110.2063212194],
    [0.00000096083, 1.91171868845, 529.6909650946],
    [0.00000078211, 6.01357067202, 1596.1864422846],
    [0.00000076743, 0.8879359685, 117.3198682202],
    [0.00000091758, 6.01068099453, 323.5054166574],
    [0.00000058133, 6.15405801099, 508.3503240922],
    [0.00000061058, 0.49120147122, 426.598190876],
    [0.0000005191, 1.01624689589, 95.9792272178],
    [0.0000004702, 5.14951363778, 1073.6090241908],
    [0.00000056622, 4.62378106559, 735.8765135318],
    [0.00000043114, 3.75952421063, 632.7837393132],
    [0.00000041243, 3.42053691338, 942.062061969],
    [0.00000035617, 4.69195154363, 625.6701923124],
    [0.00000032072, 5.60330356898, 1581.959348283],
    [0.00000032287, 4.46231638389, 551.031606097],
    [0.00000038596, 5.90763982054, 330.6189636582],
    [0.00000031385, 5.46660701189, 433.7117378768],
    [0.00000037232, 2.08609628032, 103.0927742186],
    [0.00000028376, 4.76675409874, 2118.7638603784],
    [0.00000028027, 5.02012099007, 220.4126424388],
    [0.00000030092, 3.62306294496, 949.1756089698],
    [0.00000026398, 4.29317416894, 1169.5882514086],
    [0.00000026408, 6.02283491696, 419.4846438752],
    [0.00000027814, 4.77746470785, 728.762966531],
    [0.00000024883, 1.97979816921, 199.0720014364],
    [0.00000022343, 5.30761798805, 1155.361157407],
    [0.00000022586, 2.11933395739, 956.2891559706],
    [0.00000024427, 2.46767384399, 206.1855484372],
    [0.00000024897, 0.38867758331, 519.3960243561],
    [0.00000017704, 6.02466461381, 21.3406410024],
    [0.00000020475, 3.9118415331, 539.9859058331],
    [0.00000019629, 4.21397013425, 639.897286314],
    [0.00000013417, 4.9272991928, 227.5261894396],
    [0.00000013342, 1.09257121793, 853.196381752],
    [0.00000016866, 0.22131400817, 412.3710968744],
    [0.00000011495, 4.05043005324, 440.8252848776],
    [0.00000009701, 2.23597448276, 309.2783226558],
    [0.00000009477, 4.84358236456, 1038.0412891868],
    [0.0000000822, 5.70985975275, 838.9692877504],
    [0.00000008769, 0.89310739988, 316.3918696566],
    [0.00000007455, 0.24841580448, 618.5566453116],
    [0.00000008628, 5.06371375512, 1574.8458012822],
    [0.00000006842, 6.20664652445, 1258.4539316256],
    [0.00000008122, 0.80758964343, 213.299095438],
    [0.00000006087, 6.01853033661, 831.8557407496],
    [0.00000005946, 0.25737442463, 2125.8774073792],
    [0.00000007407, 2.82917227258, 302.164775655],
    [0.00000004152, 5.9259378476, 1265.5674786264],
    [0.00000004205, 4.0435545134, 742.9900605326],
    [0.00000003704, 3.24831236243, 934.9485149682],
    [0.00000003801, 3.41557513392, 1485.9801210652],
    [0.00000004098, 0.74383398899, 124.433415221],
    [0.00000003241, 4.94814769828, 1699.2792165032],
    [0.00000002747, 4.04700205492, 88.865680217],
    [0.00000002627, 5.55596838973, 1062.5633239269],
    [0.00000002768, 3.57192238064, 1162.4747044078],
    [0.0000000246, 5.24901107627, 2648.454825473],
    [0.00000002844, 5.04262208118, 1272.6810256272],
    [0.00000002575, 4.12466032895, 1471.7530270636],
    [0.00000002322, 5.62530333683, 1603.2999892854],
    [0.00000002988, 4.1530490542, 647.0108333148],
    [0.00000002472, 4.85348496742, 721.6494195302],
    [0.00000002359, 5.74424947128, 337.732510659],
    [0.00000001967, 0.25692061324, 611.4430983108],
    [0.00000002177, 5.64857105083, 963.4027029714],
    [0.00000002018, 2.15257668467, 191.9584544356],
    [0.00000002323, 0.90656927684, 1368.660252845],
    [0.0000000168, 0.06324276128, 1685.0521225016],
    [0.00000002068, 0.7423330926, 1361.5467058442],
    [0.00000001734, 5.71681506599, 1055.4497769261],
    [0.00000001717, 3.76112914123, 447.9388318784],
    [0.00000001784, 0.18871768378, 526.5095713569],
    [0.00000001784, 1.010375311, 532.8723588323],
    [0.00000001995, 4.58300384095, 750.1036075334],
    [0.00000001811, 0.22566389001, 860.3099287528],
    [0.00000001432, 4.43308882126, 81.7521332162],
    [0.00000001393, 3.58268793739, 1478.8665740644],
    [0.0000000136, 0.72191961039, 1148.2476104062],
    [0.00000001319, 0.61971681021, 405.2575498736],
    [0.000000017, 4.16965354306, 1056.2005364515],
    [0.00000001198, 5.12844111023, 1375.7737998458],
    [0.00000001, 1.68391406249, 1382.8873468466],
    [0.00000001211, 4.41389386454, 1069.6768709277],
    [0.00000000959, 1.48751125961, 1677.9385755008],
    [0.00000001013, 0.7350941439, 1049.0869894507],
    [0.00000000858, 4.51563448609, 2420.9286360334],
    [0.00000000961, 3.58551760111, 2097.423219376],
    [0.00000000986, 5.7481099697, 2111.6503133776],
    [0.00000001043, 4.55359910492, 1080.7225711916],
    [0.00000000823, 3.61012761004, 654.1243803156],
    [0.00000000889, 3.10427323318, 295.0512286542],
    [0.00000000868, 0.26075561298, 1898.3512179396],
    [0.00000000905, 3.60441853888, 1692.1656695024],
    [0.00000000793, 4.53707206234, 234.6397364404],
    [0.00000000762, 0.94919223996, 1251.3403846248],
    [0.00000000862, 2.09929286649, 2008.557539159],
    [0.00000000962, 0.09308039006, 2317.8358618148],
    [0.00000000832, 0.14644054564, 2001.4439921582],
    [0.00000000789, 6.19434632992, 2214.7430875962],
    [0.00000000903, 0.25250598146, 846.0828347512],
    [0.00000000726, 4.95426701657, 2840.4132799086],
    [0.00000000699, 5.131175312, 2524.021410252],
    [0.00000000735, 4.321361474, 1905.4647649404],
    [0.00000000667, 0.10114093196, 1788.1448967202],
    [0.00000000684, 3.61438533975, 1141.1340634054],
    [0.00000000696, 3.3722606608, 2435.155730035],
    [0.00000000692, 0.6425593105, 1994.3304451574],
    [0.00000000742, 0.61562551337, 533.6231183577],
    [0.00000000742, 0.58346748141, 525.7588118315],
    [0.00000000714, 5.01211566337, 2015.6710861598],
    [0.00000000594, 0.66342094559, 1781.0313497194],
    [0.00000000599, 3.15618247836, 2751.5475996916],
    [0.00000000544, 3.85484227605, 1802.3719907218],
    [0.00000000636, 6.15858110426, 2627.1141844706],
    [0.00000000484, 5.0274363296, 2200.5159935946],
    [0.00000000525, 4.03223001888, 2221.856634597],
    [0.00000000618, 6.12607651654, 2634.2277314714],
    [0.00000000463, 0.23881154687, 1464.6394800628],
    [0.00000000477, 5.94296788958, 2531.1349572528],
    [0.00000000429, 4.39269281492, 2737.32050569],
    [0.00000000478, 0.3002232125, 2310.722314814],
    [0.00000000566, 4.81779203356, 2332.0629558164],
    [0.00000000417, 0.89795666781, 1891.2376709388],
    [0.00000000436, 5.88250080039, 2104.5367663768],
    [0.00000000415, 6.25558191427, 501.2367770914],
    [0.00000000415, 1.22669638769, 558.1451530978],
    [0.00000000412, 0.92939189489, 1884.124123938],
    [0.00000000465, 5.90431132183, 2943.5060541272],
];

const X4: &[Term] = &[
    [0.00001762402, 1.32863039757, 522.5774180938],
    [0.00001717846, 3.03331531843, 536.8045120954],
    [0.00000304063, 1.43144096257, 515.463871093],
    [0.00000216508, 2.91205595526, 543.9180590962],
    [0.00000128193, 3.83022265336, 1066.49547719],
    [0.00000160571, PI, 0.0],
    [0.00000081343, 4.47957999274, 7.1135470008],
    [0.00000056005, 1.80944710241, 1059.3819301892],
    [0.00000068446, 1.06498404827, 1052.2683831884],
    [0.00000050538, 4.47153935627, 14.2270940016],
    [0.00000023705, 0.46845139714, 1045.1548361876],
    [0.0000001504, 1.64164559242, 508.3503240922],
    [0.00000013698, 2.90817209326, 1589.0728952838],
    [0.00000010393, 3.46066767483, 1073.6090241908],
    [0.0000001046, 4.4972015721, 1596.1864422846],
    [0.00000009605, 4.66560401468, 110.2063212194],
    [0.0000000985, 5.49230112198, 117.3198682202],
    [0.0000000728, 3.06439988034, 529.6909650946],
    [0.00000007291, 2.57695133603, 551.031606097],
    [0.00000005808, 2.75694018383, 95.9792272178],
    [0.00000005282, 4.19154929039, 330.6189636582],
    [0.00000005227, 4.20166339031, 323.5054166574],
    [0.00000005123, 5.19044516005, 942.062061969],
    [0.00000004553, 0.08961772842, 728.762966531],
    [0.00000003511, 0.36129476314, 625.6701923124],
    [0.00000003596, 0.14061655375, 735.8765135318],
    [0.00000003286, 3.62401632706, 199.0720014364],
    [0.00000002953, 1.74528805009, 618.5566453116],
    [0.0000000286, 1.13445966545, 1581.959348283],
    [0.0000000312, 3.81985007727, 103.0927742186],
    [0.00000003181, 4.6865320798, 426.598190876],
    [0.00000002704, 2.39724100359, 440.8252848776],
    [0.00000002589, 2.5739446201, 1169.5882514086],
    [0.00000002327, 0.80202919113, 1155.361157407],
    [0.00000003177, 3.37907887071, 433.7117378768],
    [0.00000002125, 1.56457021457, 419.4846438752],
    [0.00000001916, 1.91460518178, 412.3710968744],
    [0.000000016, 3.33931055087, 2118.7638603784],
    [0.00000001468, 3.24407936987, 220.4126424388],
    [0.00000001496, 0.63527761947, 1574.8458012822],
    [0.00000001416, 3.23120302502, 227.5261894396],
    [0.00000001804, 5.66814046505, 632.7837393132],
    [0.00000001477, 0.52953212717, 831.8557407496],
    [0.00000001187, 5.738635527, 853.196381752],
    [0.00000001316, 0.52819139641, 956.2891559706],
    [0.00000001198, 1.60795245257, 1258.4539316256],
    [0.00000001531, 2.60361413382, 639.897286314],
    [0.00000001324, 4.57383336198, 302.164775655],
    [0.00000000953, 1.76837026543, 309.2783226558],
    [0.00000001142, 5.56554949818, 949.1756089698],
    [0.00000000868, 0.67942468081, 1038.0412891868],
    [0.00000000804, 1.12656034383, 838.9692877504],
    [0.00000000817, 0.87495679358, 742.9900605326],
    [0.0000000089, 2.70183985725, 647.0108333148],
    [0.00000000598, 4.03226522649, 337.732510659],
    [0.00000000557, 2.29508710588, 1485.9801210652],
    [0.00000000451, 0.61566349461, 1471.7530270636],
    [0.00000000396, 3.90384143043, 1603.2999892854],
];

const X5: &[Term] = &[
    [0.00000131471, 3.21284928867, 522.5774180938],
    [0.00000126748, 1.16307002134, 536.8045120954],
    [0.00000048324, 3.19657723128, 515.463871093],
    [0.00000034034, 1.12801913258, 543.9180590962],
    [0.00000011212, 2.19340618601, 1066.49547719],
    [0.0000000406, 3.34247545563, 1052.2683831884],
    [0.00000001943, 1.75237885755, 1073.6090241908],
    [0.00000001786, 3.0710374066, 1045.1548361876],
    [0.00000000886, 3.25499265714, 508.3503240922],
    [0.00000000886, 4.22728564482, 551.031606097],
    [0.00000000467, 2.94921347849, 1596.1864422846],
];

const Y0: &[Term] = &[
    [5.19520046589, 5.31203162731, 529.6909650946],
    [0.12592862602, 5.66160227728, 1059.3819301892],
    [0.09363670616, PI, 0.0],
    [0.01508275299, 5.43934968102, 522.5774180938],
    [0.0147580937, 2.04679566495, 536.8045120954],
    [0.00457750806, 6.01129093501, 1589.0728952838],
    [0.00300686679, 3.6094805074, 7.1135470008],
    [0.00378285578, 3.53006782383, 103.0927742186],
    [0.00192333128, 3.45690564771, 426.598190876],
    [0.00146104656, 4.62267224431, 110.2063212194],
    [0.00139480058, 4.00075307706, 632.7837393132],
    [0.00132696764, 5.62184581859, 213.299095438],
    [0.00101999807, 4.57594598884, 1052.2683831884],
    [0.0011404311, 4.72982262969, 1162.4747044078],
    [0.00072091178, 2.39048659148, 1066.49547719],
    [0.00059051769, 2.89529070968, 949.1756089698],
    [0.00068374489, 1.86537074374, 846.0828347512],
    [0.00029807369, 4.5210577274, 206.1855484372],
    [0.00026933579, 3.86233956827, 419.4846438752],
    [0.00026619714, 3.28203174951, 323.5054166574],
    [0.0002087378, 3.79369881757, 735.8765135318],
    [0.00019727397, 0.07818534532, 2118.7638603784],
    [0.00018639846, 0.38751972138, 316.3918696566],
    [0.00016355726, 5.56997881604, 515.463871093],
    [0.00014606858, 0.47759399145, 742.9900605326],
    [0.00011419853, 1.91089341468, 543.9180590962],
    [0.00012153427, 2.18151972499, 525.7588118315],
    [0.00011988875, 5.29687602089, 533.6231183577],
    [0.00008443107, 1.91435801697, 639.897286314],
    [0.00008163163, 4.00303742375, 1478.8665740644],
    [0.00008732789, 5.09607066097, 1692.1656695024],
    [0.00007414115, 4.41141990461, 956.2891559706],
    [0.00007619486, 5.59554151997, 1265.5674786264],
    [0.00007779184, 4.83346300662, 1581.959348283],
    [0.00005322882, 5.81740472645, 526.5095713569],
    [0.00005217025, 1.66178643542, 532.8723588323],
    [0.00005772132, 3.46915716927, 14.2270940016],
    [0.00004528355, 2.18377558038, 1375.7737998458],
    [0.00003939875, 2.73830531054, 1596.1864422846],
    [0.00004567181, 3.71300776935, 95.9792272178],
    [0.00003235419, 4.76600347062, 625.6701923124],
    [0.0000314074, 5.59566796922, 309.2783226558],
    [0.00002855423, 4.44478286006, 117.3198682202],
    [0.00002445625, 2.6703695223, 433.7117378768],
    [0.00002253545, 4.28462825722, 838.9692877504],
    [0.00002672262, 1.61857897069, 1169.5882514086],
    [0.00002423639, 2.32942339839, 220.4126424388],
    [0.00002362662, 4.60417580207, 1155.361157407],
    [0.00002409581, 4.33196301609, 1045.1548361876],
    [0.00001458169, 4.18761881277, 853.196381752],
    [0.00001432195, 3.248245545, 942.062061969],
    [0.00001646568, 3.91965876562, 74.7815985673],
    [0.0000105027, 4.83706014327, 1795.258443721],
    [0.00001002355, 1.5093193987, 1272.6810256272],
    [0.00000922972, 4.68727792575, 199.0720014364],
    [0.00000934476, 0.4288605543, 2648.454825473],
    [0.00000858322, 2.14237489817, 529.6427809848],
    [0.00000858227, 5.34018602564, 529.7391492044],
    [0.00001087727, 5.84673086939, 527.2432845398],
    [0.00001079512, 1.63448507346, 532.1386456494],
    [0.00000806006, 1.68267639334, 1368.660252845],
    [0.0000095727, 6.06002229163, 149.5631971346],
    [0.00000847127, 5.93043140082, 3.9321532631],
    [0.00000980751, 0.62999941324, 380.12776796],
    [0.0000068208, 4.52942528324, 2008.557539159],
    [0.00000669757, 4.030164062, 728.762966531],
    [0.00000747759, 3.13980492033, 330.6189636582],
    [0.00000623272, 4.84897478374, 2111.6503133776],
    [0.00000693931, 6.05213927263, 1063.3140834523],
    [0.00000679997, 5.00632204302, 528.7277572481],
    [0.00000678365, 2.47630881775, 530.6541729411],
    [0.00000575319, 5.46049674365, 2221.856634597],
    [0.00000562901, 2.4930554767, 1055.4497769261],
    [0.00000518936, 4.17355493103, 412.3710968744],
    [0.00000647097, 3.5549639159, 984.6003316219],
    [0.00000456078, 3.65466665401, 1471.7530270636],
    [0.00000459952, 2.25589512899, 1073.6090241908],
    [0.00000540076, 3.74723115522, 38.1330356378],
    [0.00000410344, 1.41779899532, 909.8187330546],
    [0.00000357023, 5.38580302034, 1258.4539316256],
    [0.00000299281, 2.485463987, 1905.4647649404],
    [0.00000333647, 5.6659303844, 76.2660712756],
    [0.0000038845, 4.49029761988, 604.4725636619],
    [0.00000381037, 3.30799287543, 3.1813937377],
    [0.00000303843, 3.49297492409, 529.1697002328],
    [0.00000303451, 3.98820790955, 530.2122299564],
    [0.00000275733, 5.36302088998, 1485.9801210652],
    [0.00000360736, 2.95686029502, 454.9093665273],
    [0.00000254327, 2.01404147058, 1062.5633239269],
    [0.00000263791, 4.57708545504, 1574.8458012822],
    [0.00000226963, 3.087490624, 2125.8774073792],
    [0.00000304142, 0.18267926862, 6283.0758499914],
    [0.00000291946, 4.55436664519, 305.3461693927],
    [0.0000022558, 1.93114465962, 1699.2792165032],
    [0.00000195868, 5.71186875574, 508.3503240922],
    [0.00000233285, 5.63548319924, 1056.2005364515],
    [0.00000210214, 2.44863388631, 490.3340891794],
    [0.00000178839, 4.53006992902, 526.7702037878],
    [0.00000177005, 2.95243321654, 532.6117264014],
    [0.00000172351, 5.18722712249, 1898.3512179396],
    [0.00000165053, 1.90578907085, 528.9402055692],
    [0.00000164585, 5.57619428876, 530.44172462],
    [0.00000191497, 5.01693056182, 569.0478410098],
    [0.00000155401, 5.96579992385, 519.3960243561],
    [0.00000215233, 0.97247023787, 453.424893819],
    [0.00000208229, 1.82281614022, 1439.5096981492],
    [0.00000157996, 2.75766580241, 525.4981794006],
    [0.00000155479, 4.72686997635, 533.8837507886],
    [0.00000166712, 2.08631169849, 224.3447957019],
    [0.00000139402, 1.78553934341, 647.0108333148],
    [0.0000019458, 3.73461183144, 1021.2488945514],
    [0.00000152633, 5.70470310157, 302.164775655],
    [0.00000136386, 0.9687967389, 11.0457002639],
    [0.00000142502, 2.18746053267, 227.5261894396],
    [0.00000176907, 1.60589176438, 10213.285546211],
    [0.00000124507, 3.45933363747, 1788.1448967202],
    [0.00000174817, 0.43249591548, 1.4844727083],
    [0.00000133665, 4.63491612092, 831.8557407496],
    [0.00000120579, 1.51220177525, 539.9859058331],
    [0.00000134336, 2.22677523856, 540.7366653585],
    [0.00000121877, 2.21859738997, 524.0618908021],
    [0.00000120032, 5.265582915, 535.3200393871],
    [0.00000124427, 1.81779375202, 983.1158589136],
    [0.00000147154, 2.17687114643, 1685.0521225016],
    [0.00000123569, 1.775787052, 525.0250986486],
    [0.0000011766, 1.79992315819, 750.1036075334],
    [0.0000010443, 2.1947206637, 529.5309064002],
    [0.0000010443, 5.28755763826, 529.851023789],
    [0.00000104807, 1.75473051914, 551.031606097],
    [0.00000119646, 5.02394125709, 2324.9494088156],
    [0.00000116159, 5.71003552223, 534.3568315406],
    [0.00000122805, 3.33550927204, 524.2743391232],
    [0.00000103138, 2.84304085733, 963.4027029714],
    [0.00000120958, 4.14524856046, 535.107591066],
    [0.00000106645, 4.96153948786, 99.1606209555],
    [0.00000125536, 5.60866656844, 618.5566453116],
    [0.00000094764, 1.67979960592, 1802.3719907218],
    [0.00000091886, 4.73072188729, 1382.8873468466],
    [0.00000091856, 1.46489918938, 440.8252848776],
    [0.00000111205, 1.86928344986, 2001.4439921582],
    [0.00000096101, 3.31559741874, 21.3406410024],
    [0.00000072096, 2.45181685946, 529.9034134157],
    [0.00000072096, 5.0304614425, 529.4785167735],
    [0.00000095413, 4.36603562454, 35.4247226521],
    [0.00000068201, 4.35530252461, 415.5524906121],
    [0.00000067561, 4.99490654468, 518.6452648307],
    [0.00000073325, 4.05750215119, 511.5317178299],
    [0.00000069891, 1.59601188063, 114.1384744825],
    [0.00000082393, 1.01105072945, 531.1754378029],
    [0.00000059078, 3.24284112832, 2104.5367663768],
    [0.00000068945, 3.40976028537, 547.8502123593],
    [0.00000073989, 2.84748642801, 173.9422195228],
    [0.00000055826, 3.23356285605, 643.8294395771],
    [0.000000636, 4.60690964524, 2214.7430875962],
    [0.00000076559, 0.16914007578, 528.2064923863],
    [0.0000005401, 0.38559528823, 1048.3362299253],
    [0.00000052462, 3.04351725279, 960.2213092337],
    [0.000000548, 5.00177597234, 2641.3412784722],
    [0.00000051559, 0.07590374858, 514.7131115676],
    [0.00000066311, 2.16873151551, 230.5645708254],
    [0.00000049711, 1.1233049504, 544.6688186216],
    [0.00000051168, 4.15417169162, 2428.0421830342],
    [0.00000048033, 1.64769682284, 387.2413149608],
    [0.00000064548, 5.74425604097, 1364.7280995819],
    [0.00000056419, 3.19672283659, 107.0249274817],
    [0.00000052715, 6.1961810297, 1056.9342496344],
    [0.00000062657, 2.18566435838, 92.0470739547],
    [0.00000046791, 4.99032278168, 2538.2485042536],
    [0.00000060723, 5.6040129448, 494.2662424425],
    [0.00000060019, 2.20885261687, 1061.829610744],
    [0.00000043765, 1.93541168857, 2.4476805548],
    [0.00000049754, 0.31051950136, 679.2541622292],
    [0.00000058551, 0.7421932445, 1057.8974574809],
    [0.00000047066, 0.78305409047, 3178.1457905676],
    [0.00000041687, 5.68958878057, 1059.430114299],
    [0.00000041489, 1.87471147598, 70.8494453042],
    [0.00000040368, 4.11954132163, 1148.2476104062],
    [0.00000049389, 4.38369647117, 1038.0412891868],
    [0.0000005222, 1.89730883021, 565.1156877467],
    [0.00000049041, 2.58330127182, 523.5406259403],
    [0.00000043994, 3.28606341309, 312.4597163935],
    [0.00000044122, 6.06196963732, 430.5303441391],
    [0.00000041687, 2.49177765294, 1059.3337460794],
    [0.00000037225, 5.83615789846, 2751.5475996916],
    [0.00000040007, 4.94676776315, 106.2741679563],
    [0.00000041523, 3.87602477966, 1514.2912967165],
    [0.00000041708, 3.08131901475, 10.2949407385],
    [0.00000048107, 1.57443805994, 2317.8358618148],
    [0.00000040515, 4.90771896305, 18.1592472647],
    [0.0000003579, 5.8558588869, 672.1406152284],
    [0.00000048789, 4.6285231497, 3340.6124266998],
    [0.00000044449, 4.90238683987, 535.8413042489],
    [0.00000036844, 4.16675448786, 529.4303326637],
    [0.00000036844, 3.3155238141, 529.9515975255],
    [0.00000047082, 2.1647901351, 1512.8068240082],
    [0.00000041507, 0.21319785414, 1593.0050485469],
    [0.00000045707, 5.76601541697, 39.3568759152],
    [0.00000032943, 2.27946726035, 522.529233984],
    [0.0000003539, 5.49210934651, 522.6256022036],
    [0.0000003287, 4.25352856877, 124.433415221],
    [0.0000003485, 2.92484630853, 1060.3451380357],
    [0.00000035863, 4.35046455076, 1891.2376709388],
    [0.00000030492, 2.81576230965, 1585.1407420207],
    [0.00000029098, 5.87348600011, 121.2520214833],
    [0.00000033186, 1.42044741925, 628.8515860501],
    [0.00000029909, 1.98838991554, 536.7563279856],
    [0.00000027497, 5.203493524, 536.8526962052],
    [0.00000033054, 4.51359014873, 567.8240007324],
    [0.00000027261, 2.72031348322, 2420.9286360334],
    [0.00000028101, 1.37111796252, 1361.5467058442],
    [0.00000027675, 3.76752413844, 528.4189407074],
    [0.00000027586, 3.7147133344, 530.9629894818],
    [0.00000033894, 4.63464333784, 885.4397106664],
    [0.00000025302, 0.69085103669, 458.8415197904],
    [0.00000024545, 4.07153029692, 99.9113804809],
    [0.00000032993, 5.35577320707, 1058.4187223427],
    [0.00000031537, 4.79089399996, 437.6438911399],
    [0.00000023976, 4.11015501858, 523.0986829556],
    [0.00000027158, 4.04172462614, 934.9485149682],
    [0.00000030585, 3.1403602715, 1023.9572075371],
    [0.00000025975, 4.25064688963, 636.7158925763],
    [0.00000027098, 5.64808831952, 497.4476361802],
    [0.00000026669, 1.61201743542, 1158.5425511447],
    [0.0000002469, 4.15165447061, 746.9222137957],
    [0.00000024824, 4.87213067968, 1134.1635287565],
    [0.00000027669, 6.13571385852, 142.4496501338],
    [0.0000002187, 3.37410336472, 536.2832472336],
    [0.0000002223, 5.18596760154, 521.6142102473],
    [0.0000002362, 3.19789358019, 422.6660376129],
    [0.00000026903, 4.5533846653, 299.1263942692],
    [0.00000027936, 3.40155518417, 1289.9465010146],
    [0.00000019758, 3.57384619762, 1464.6394800628],
    [0.00000019591, 2.60352108738, 1603.2999892854],
    [0.00000024393, 1.76922514363, 561.934294009],
    [0.00000018999, 0.54653451644, 327.4375699205],
    [0.0000002122, 4.75366337409, 495.7507151508],
    [0.00000024955, 3.56668671603, 860.3099287528],
    [0.00000018395, 3.09432236608, 953.1077622329],
    [0.00000019559, 0.33422760418, 1098.7388061044],
    [0.0000001964, 0.81920620311, 835.0371344873],
    [0.00000018357, 0.62106608418, 5.6290742925],
    [0.0000002352, 2.68263802863, 621.7380390493],
    [0.00000018076, 0.42845386573, 600.5404103988],
    [0.00000017517, 2.68195071531, 2435.155730035],
    [0.00000017253, 4.86475799937, 191.9584544356],
    [0.00000017066, 2.47355544144, 491.5579294568],
    [0.00000017873, 2.29598514123, 537.7677199419],
    [0.00000017574, 4.33646292397, 217.2312487011],
    [0.00000016951, 4.03050492549, 2744.4340526908],
    [0.00000018236, 3.95613517708, 2207.6295405954],
    [0.00000021575, 4.69631525985, 1166.4068576709],
    [0.00000019199, 2.72711453647, 563.6312150384],
    [0.00000021553, 0.29372828887, 88.865680217],
    [0.00000016163, 4.86951152442, 1049.0869894507],
    [0.00000016488, 2.27763578296, 2228.9701815978],
    [0.00000019792, 5.64210393649, 505.3119427064],
    [0.00000018457, 2.18289841443, 1969.2006632438],
    [0.00000015808, 5.67233344465, 988.532484885],
    [0.00000016272, 2.33706628798, 526.9826521089],
    [0.0000001617, 5.1450866348, 532.3992780803],
    [0.00000015841, 0.5612526875, 731.9443602687],
    [0.00000015853, 1.45510827717, 501.3797894433],
    [0.00000016239, 2.20090269794, 32.2433289144],
    [0.0000001949, 3.9944970553, 2531.1349572528],
    [0.00000015691, 2.48513582725, 24.3790223882],
    [0.0000001851, 1.8460169271, 554.0699874828],
    [0.00000020372, 1.3853811649, 2634.2277314714],
    [0.00000014994, 2.011982104, 460.5384408198],
    [0.00000014712, 3.84306627886, 1058.8606653274],
    [0.00000014869, 5.98368245357, 558.0021407459],
    [0.00000014439, 3.28637158278, 1070.4276304531],
    [0.00000018929, 2.03175968425, 535.9107402181],
    [0.00000015643, 0.97730443591, 4.665866446],
    [0.00000018715, 5.44782618977, 523.4711899711],
    [0.00000017929, 3.40311830148, 1151.4290041439],
    [0.00000013761, 6.04543388528, 67.6680515665],
    [0.00000013749, 0.52644877498, 450.9772132642],
    [0.00000013319, 2.42538953638, 2737.32050569],
    [0.00000013569, 5.7790664206, 1585.8915015461],
    [0.00000014895, 0.11330960665, 2015.6710861598],
    [0.00000013428, 5.50626546494, 597.3590166611],
    [0.00000013707, 2.03789881373, 498.6714764576],
    [0.00000013957, 2.36417098087, 1592.2542890215],
    [0.00000013524, 3.44876320737, 2655.5683724738],
    [0.00000012857, 5.50739277119, 598.8434893694],
    [0.00000014249, 1.72248779684, 462.0229135281],
    [0.00000014314, 4.07019733205, 1550.939859646],
    [0.00000015119, 5.81156443174, 760.25553592],
    [0.00000014774, 5.80625161615, 945.2434557067],
    [0.00000013736, 4.07129679948, 113.3877149571],
    [0.00000012011, 1.63521325776, 938.1299087059],
    [0.00000012753, 5.44403915759, 560.7104537316],
    [0.00000012686, 6.23818302908, 531.387886124],
    [0.00000012686, 1.24409527288, 527.9940440652],
    [0.0000001502, 6.08208603474, 155.7829722581],
    [0.00000015484, 1.72167500453, 378.6432952517],
    [0.00000014712, 4.33830015465, 1059.903195051],
    [0.00000011546, 0.31915225651, 635.9651330509],
    [0.00000011513, 2.7439356909, 0.9632078465],
    [0.00000014239, 4.97740702783, 151.0476698429],
    [0.00000011629, 0.67354350592, 608.404716925],
    [0.00000011186, 0.05170826029, 528.2546764961],
    [0.00000011186, 1.14738473449, 531.1272536931],
    [0.00000015402, 0.99057013095, 202.2533951741],
    [0.00000011189, 4.62167915661, 629.6023455755],
    [0.00000011721, 3.81962472178, 46.470422916],
    [0.00000013072, 4.76911685302, 5.4166259714],
    [0.00000010861, 3.06774497499, 248.7238180901],
    [0.00000011885, 0.56823593189, 63.7358983034],
    [0.00000010799, 2.85278783229, 429.7795846137],
    [0.00000013435, 2.74869166537, 1041.2226829245],
    [0.00000012895, 2.71685060291, 944.9828232758],
    [0.00000011192, 4.3998037985, 33.9402499438],
    [0.00000014182, 3.01202846061, 1173.5204046717],
    [0.00000014077, 5.16982319226, 1251.3403846248],
    [0.00000013485, 2.70711798609, 381.6122406683],
    [0.00000010406, 4.36645544425, 210.1177017003],
    [0.00000010332, 5.95361308692, 605.9570363702],
    [0.00000010132, 3.19923194355, 9.5612275556],
    [0.00000013791, 2.97971347845, 337.732510659],
    [0.00000013472, 4.50305810844, 721.6494195302],
    [0.00000009741, 5.19335132324, 1159.2933106701],
    [0.00000013201, 5.96637135723, 28.3111756513],
    [0.00000009379, 0.10962671346, 320.3240229197],
    [0.0000000898, 1.05396139591, 1165.6560981455],
    [0.00000009071, 2.27040574511, 754.0357607965],
    [0.00000008886, 0.31938474896, 530.914805372],
    [0.00000008886, 0.87970824582, 528.4671248172],
    [0.0000001212, 3.28130394954, 1020.025054274],
    [0.00000008878, 3.19756714253, 195.1398481733],
    [0.00000009323, 3.63280904935, 2524.021410252],
    [0.00000012149, 4.57844422505, 72.0732855816],
    [0.00000008701, 3.35407914352, 1781.0313497194],
    [0.00000008635, 4.87675285165, 1056.4611688824],
    [0.00000009302, 4.57312893311, 1567.7322542814],
    [0.0000001079, 5.3490128107, 530.5847369719],
    [0.0000001079, 2.13326549126, 528.7971932173],
    [0.00000007989, 2.2556211431, 1058.6311706638],
    [0.00000008394, 1.01712590368, 525.5463635104],
    [0.00000007749, 0.18520987807, 521.8266585684],
    [0.00000008309, 0.18252574301, 533.8355666788],
    [0.00000010492, 3.02062266658, 319.5732633943],
    [0.00000009455, 4.42860833187, 2957.7331481288],
    [0.00000007601, 1.01410800239, 537.5552716208],
    [0.00000008635, 3.30118117017, 1062.302691496],
    [0.00000007859, 5.09973182378, 1064.7985561606],
    [0.00000007602, 5.07538034057, 1063.5747158832],
    [0.00000008125, 6.02981549694, 405.2575498736],
    [0.00000007989, 5.92574529041, 1060.1326897146],
    [0.00000010154, 1.81583583759, 456.3938392356],
    [0.00000009868, 5.44091536822, 2854.6403739102],
    [0.00000007887, 3.45839291267, 2847.5268269094],
    [0.0000000839, 1.92118712996, 2332.0629558164],
    [0.00000007855, 4.08738591474, 739.8086667949],
    [0.00000009014, 1.02506603313, 1201.831580323],
    [0.00000007272, 3.74977886021, 148.0787244263],
    [0.00000009035, 1.17767860384, 2950.619601128],
    [0.00000007172, 5.78872895095, 31.019488637],
    [0.00000009083, 1.83960142614, 73.297125859],
    [0.00000006861, 1.24455164613, 1054.7160637432],
    [0.00000007966, 4.97522951621, 842.1506814881],
    [0.00000007366, 1.18908930125, 423.4167971383],
    [0.00000007539, 5.35827249789, 952.3570027075],
    [0.00000007674, 4.5897467529, 334.5511169213],
    [0.00000006945, 3.82929951189, 277.0349937414],
    [0.0000000844, 5.66460249626, 483.2205421786],
    [0.00000008658, 1.0367708883, 1215.1649024473],
    [0.00000006766, 5.18191429441, 1912.5783119412],
    [0.00000008924, 5.67297999466, 602.9880909536],
    [0.00000006412, 2.13183556856, 3053.7123753466],
    [0.0000000871, 1.69359494585, 576.1613880106],
    [0.00000007535, 1.43209684879, 1060.8664028975],
    [0.00000006715, 2.2648558995, 408.4389436113],
    [0.00000006823, 0.60912657611, 284.1485407422],
    [0.0000000677, 5.53650784553, 69.1525242748],
    [0.00000006566, 0.4072817128, 355.7487455718],
    [0.00000008559, 2.16359232622, 1677.9385755008],
    [0.00000006912, 3.40820667177, 945.9942152321],
    [0.0000000673, 0.56194767825, 528.0464336919],
    [0.0000000673, 0.63714531653, 531.3354964973],
    [0.00000007602, 3.10155768831, 1055.1891444952],
    [0.00000006013, 5.10742672906, 1035.002907801],
    [0.00000005935, 2.94453315678, 498.1983957056],
    [0.00000007319, 1.36131082578, 6.2197751235],
    [0.00000005949, 2.5711257553, 724.8308132679],
    [0.00000005856, 5.61085624056, 1276.6131788903],
    [0.00000007648, 3.22132265146, 247.2393453818],
    [0.00000005605, 1.26367820429, 513.2286388593],
    [0.00000005584, 3.39988425577, 100.6450936638],
    [0.00000005502, 3.89695891739, 3060.8259223474],
    [0.00000007615, 4.10463520395, 351.8165923087],
    [0.00000005914, 3.68583540418, 1053.9653042178],
    [0.00000005497, 4.41143963319, 810.6581120991],
    [0.00000005507, 4.54722710597, 561.1835344836],
    [0.00000005666, 6.05825689215, 1064.0477966352],
    [0.00000005378, 6.2185999659, 546.1532913299],
    [0.0000000626, 3.19727825497, 1493.093668066],
    [0.00000006793, 5.62753980255, 303.8616966844],
    [0.00000005204, 3.23894565507, 1091.6252591036],
    [0.00000005131, 2.58192471387, 1176.7017984094],
    [0.00000006815, 1.54708178098, 1053.7528558967],
    [0.00000005065, 2.54426472948, 1059.2218714948],
    [0.00000006336, 2.50077514097, 908.3342603463],
    [0.00000004973, 1.03425894477, 245.5424243524],
    [0.0000000547, 1.85711160191, 757.2171545342],
    [0.00000004894, 0.33758490678, 775.233389447],
    [0.00000005382, 2.05459210213, 512.4254897072],
    [0.00000005693, 4.67643220253, 166.828672522],
    [0.00000005065, 5.63710170403, 1059.5419888836],
    [0.00000004985, 3.35221747486, 2840.4132799086],
    [0.00000004955, 1.84826531558, 1069.6768709277],
    [0.00000005153, 5.42768605926, 546.956440482],
    [0.00000004749, 4.04043420885, 415.2918581812],
    [0.00000005384, 0.81789121948, 209.3669421749],
    [0.00000004911, 6.22971061903, 512.2824773553],
    [0.00000004553, 1.47996204216, 509.2440959695],
    [0.00000004672, 2.0411607139, 234.6397364404],
    [0.00000004418, 3.08681555133, 2097.423219376],
    [0.00000004523, 6.15421637977, 611.4430983108],
    [0.00000006052, 2.81885559517, 26087.9031415742],
    [0.00000004324, 6.00231606657, 550.1378342197],
    [0.00000004417, 0.89935900799, 1127.0499817557],
    [0.00000004688, 5.54227030903, 504.561183181],
    [0.00000004202, 5.1522983831, 469.8872200543],
    [0.00000004894, 0.30289339863, 739.0579072695],
    [0.00000004144, 1.71461163426, 970.5162499722],
    [0.00000005739, 3.37720444365, 707.5653378805],
    [0.00000004256, 2.9554347206, 512.1648572763],
    [0.00000004431, 4.63633093035, 519.656656787],
    [0.00000005723, 5.51760124056, 1065.0110044817],
    [0.00000005589, 4.77443673434, 280.9671470045],
    [0.00000004469, 0.52405952073, 857.1285350151],
    [0.00000004217, 3.24827021932, 1489.9122743283],
    [0.00000004804, 0.68976934373, 391.1734682239],
    [0.00000005007, 4.52014200146, 491.8185618877],
    [0.00000003986, 1.06372222504, 447.9388318784],
    [0.00000003947, 3.8024209618, 112.6540017742],
    [0.00000004072, 4.5268434419, 547.2170729129],
    [0.00000005087, 3.27440412379, 114.3991069134],
    [0.00000004369, 1.9483467103, 554.8207470082],
    [0.00000004085, 3.32144080176, 916.9322800554],
    [0.00000004733, 0.67139053204, 1087.6931058405],
    [0.0000000384, 0.34109385145, 479.2883889155],
    [0.00000003995, 0.8561038203, 1578.0271950199],
    [0.00000004249, 5.04389491785, 203.0041546995],
    [0.00000004393, 5.38198575849, 3171.0322435668],
    [0.00000004628, 2.95945654561, 567.5633683015],
    [0.00000004429, 3.3348330321, 1025.4416802454],
    [0.00000004166, 1.09654835252, 1587.5884225755],
    [0.00000004233, 2.53201175338, 2042.4977891028],
    [0.00000003711, 2.98775049023, 3163.918696566],
    [0.00000004086, 2.55427154862, 237.6781178262],
    [0.00000004681, 5.83662690281, 295.0512286542],
    [0.00000003571, 2.08867966814, 1080.7225711916],
    [0.00000003544, 4.38394808666, 849.2642284889],
    [0.00000004083, 3.8694852484, 782.3469364478],
    [0.00000003901, 3.58138051516, 1894.4190646765],
    [0.00000003497, 2.80136092523, 1059.5943785103],
    [0.00000003507, 2.32962653089, 589.4947101349],
    [0.00000003472, 0.85726515864, 580.0935412737],
    [0.0000000368, 1.21278207938, 547.0994528339],
    [0.00000004542, 6.14690384106, 105.5404547734],
    [0.00000003369, 3.55330457921, 103.1409583284],
    [0.0000000363, 0.69909450749, 81.7521332162],
    [0.00000003697, 2.7902934668, 326.6868103951],
    [0.00000003539, 3.61983213468, 1012.9115072732],
    [0.00000003845, 3.22543778565, 222.8603229936],
    [0.00000003325, 0.37561309842, 103.0445901088],
    [0.00000003987, 0.97522695807, 3267.0114707846],
    [0.00000003497, 5.38000550828, 1059.1694818681],
    [0.00000004054, 3.71419071011, 81.0013736908],
    [0.000000036, 4.2955883949, 3274.1250177854],
    [0.0000000335, 3.76399755757, 1077.5411774539],
    [0.00000003196, 5.60457950896, 3067.9394693482],
    [0.00000004303, 0.65968200895, 373.9079928365],
    [0.00000003455, 3.42091932175, 488.8496164711],
    [0.00000003335, 4.44235745725, 1049.8207026336],
    [0.00000003852, 2.52438607753, 1065.6017053127],
    [0.00000003924, 4.1831400635, 836.5216071956],
    [0.00000003619, 0.6946422961, 104.0559820651],
    [0.00000004403, 2.90782146623, 987.3086446076],
    [0.00000003691, 3.23351247093, 102.1295663721],
    [0.00000003303, 2.85125001065, 539.7252734022],
    [0.00000003982, 5.66127902337, 986.0848043302],
    [0.00000003666, 1.43198397957, 77.7505439839],
    [0.00000004012, 0.62727446399, 668.2084619653],
    [0.00000003967, 1.33281868984, 486.4019359163],
    [0.00000003012, 1.97259943071, 3370.1042450032],
    [0.00000003953, 2.04087960765, 1123.1178284926],
    [0.00000003209, 2.10209077076, 145.6310438715],
    [0.00000003959, 3.37764873211, 306.830642101],
    [0.00000002943, 5.66644527612, 1269.4996318895],
    [0.00000002958, 4.39711798299, 527.6852275245],
    [0.00000002958, 3.08516031897, 531.6967026647],
    [0.00000003055, 0.64523665181, 654.1243803156],
    [0.00000003, 3.74971900277, 911.3032057629],
    [0.00000002909, 3.07525222975, 522.6892926784],
    [0.00000002909, 4.40702607221, 536.6926375108],
    [0.00000003563, 2.04687487947, 1994.3304451574],
    [0.00000003893, 4.26173750986, 812.1425848074],
    [0.00000003118, 4.06135823006, 570.5323137181],
    [0.00000003682, 1.06944542634, 225.8292684102],
    [0.00000003463, 2.60209047668, 1591.5205758386],
    [0.00000003751, 3.60628368678, 977.4867846211],
    [0.00000003448, 3.47211094381, 685.4739373527],
    [0.00000003534, 0.47144281609, 78.7137518304],
    [0.0000000287, 0.26308381178, 1586.625214729],
    [0.00000002875, 4.32622434464, 504.4181708291],
    [0.00000003866, 4.95821738791, 824.7421937488],
    [0.00000003556, 6.14961940524, 572.9799942729],
    [0.00000002918, 5.73628166716, 967.3348562345],
    [0.00000002906, 4.29227546323, 416.3032501375],
    [0.00000002909, 3.95660523001, 1482.7987273275],
    [0.00000002672, 0.87511357041, 134.5853436076],
    [0.00000002628, 0.00847208263, 3281.2385647862],
    [0.00000002715, 3.16963075966, 554.9637593601],
    [0.00000002651, 2.27063793995, 144.1465711632],
    [0.00000003601, 0.47144134781, 991.7138786227],
    [0.00000002614, 0.4196449373, 93.531546663],
    [0.00000002855, 2.03044050467, 850.0149880143],
    [0.00000002821, 1.06657048032, 502.8642621516],
    [0.00000003112, 6.0306044408, 520.129737539],
    [0.00000003142, 4.62490556976, 539.2521926502],
    [0.00000002731, 4.6733736449, 522.4655435092],
    [0.00000002731, 2.80890465706, 536.91638668],
    [0.00000003064, 4.44170325172, 1884.124123938],
    [0.00000002441, 0.83069302598, 1474.9344208013],
    [0.00000002456, 1.47279271371, 1074.3597837162],
    [0.00000002439, 2.08558923005, 107.7586406646],
    [0.00000002456, 0.42538841262, 1044.4040766622],
    [0.00000003031, 3.37619616684, 521.0929453855],
    [0.00000003031, 4.10608213512, 538.2889848037],
    [0.0000000259, 0.16004731508, 556.5176680376],
    [0.00000003226, 4.60312494465, 522.7898664149],
    [0.00000003226, 2.87915335731, 536.5920637743],
    [0.00000002363, 3.28962549381, 285.3723810196],
    [0.00000002452, 0.62028796575, 1090.4014188262],
    [0.00000002323, 2.60824432402, 529.0578256482],
    [0.00000002323, 4.87403397794, 530.324104541],
    [0.00000003159, 5.4733256561, 457.617679513],
    [0.00000003023, 1.37043511978, 526.722019678],
    [0.00000003023, 6.11184318218, 532.6599105112],
    [0.00000002393, 2.85135439551, 1053.2315910349],
    [0.00000002997, 2.91346721535, 1438.0252254409],
    [0.00000002824, 1.712279818, 108.7218485111],
    [0.0000000222, 2.80874155199, 2413.8150890326],
    [0.00000002234, 3.74593385034, 3377.217792004],
    [0.00000002627, 2.23895631422, 1094.8066528413],
    [0.00000002477, 3.21084842387, 3156.8051495652],
    [0.0000000253, 0.10552341266, 12566.1516999828],
    [0.00000002273, 6.03923806707, 1589.1210793936],
    [0.0000000219, 5.77618493519, 97.6761482472],
    [0.00000002217, 4.33373247849, 1254.5217783625],
    [0.00000002201, 4.15471098454, 2043.9822618111],
    [0.00000002858, 3.89745174384, 1440.9941708575],
    [0.00000002222, 4.9872537441, 376.1956146969],
    [0.0000000277, 5.83704344924, 39.6175083461],
    [0.00000002839, 4.97687573513, 1140.38330388],
    [0.00000002926, 4.39522157497, 732.6951197941],
    [0.00000002251, 2.16205964084, 1067.4586850365],
    [0.00000002782, 5.200735446, 451.9404211107],
    [0.00000002206, 4.97562217236, 6681.2248533996],
    [0.00000002191, 2.83588669322, 842.9014410135],
    [0.00000002512, 2.04067568304, 1261.6353253633],
    [0.00000002217, 1.56495606058, 902.7051860538],
    [0.00000002522, 0.74750896561, 373.0142209592],
    [0.00000002157, 5.37570047911, 59.8037450403],
    [0.00000002035, 3.84713937892, 523.849442481],
    [0.00000002035, 3.63513892304, 535.5324877082],
    [0.00000002769, 4.85615053084, 1744.8558675419],
    [0.0000000219, 2.65356791032, 417.0369633204],
    [0.00000002366, 1.24394483245, 3707.8367556622],
    [0.000000021, 1.97563817578, 1688.2335162393],
    [0.00000002548, 0.72953715709, 1128.534454464],
    [0.00000002551, 1.03971611498, 232.0490435337],
    [0.0000000187, 6.04196842136, 501.2367770914],
    [0.00000001894, 2.66113148974, 3480.3105662226],
    [0.00000001851, 4.86018399563, 111.1695290659],
    [0.00000002198, 2.51049365003, 429.0458714308],
    [0.00000001873, 0.5905232246, 1208.9451273238],
    [0.0000000251, 1.99459673774, 601.7642506762],
    [0.00000002186, 3.4858055645, 1553.6481726317],
    [0.00000002291, 1.45172941088, 488.63716815],
    [0.00000001875, 3.39330212644, 1590.0361031303],
    [0.00000001806, 5.04361493519, 913.7508863177],
    [0.00000001962, 1.12671675097, 109.2431133729],
    [0.00000002129, 5.01243773449, 821.703812363],
    [0.00000002196, 4.38946985073, 298.2326223919],
    [0.00000001953, 5.49728281015, 1415.130675761],
    [0.00000001787, 3.66506787987, 1059.6425626201],
    [0.00000002375, 0.70058711647, 2122.6960136415],
    [0.00000002173, 5.25212332069, 1065.5322693435],
    [0.00000001733, 0.73534814865, 162.8965192589],
    [0.00000002273, 2.84142693944, 1589.024711174],
    [0.0000000178, 4.29158703684, 1051.3051753419],
    [0.00000001716, 2.65555145996, 503.8274699981],
    [0.0000000197, 2.68005551637, 362.8622925726],
    [0.00000001697, 5.6609896741, 1052.3165672982],
    [0.0000000227, 4.84012800369, 36.6485629295],
    [0.00000001805, 1.44303434972, 110.2545053292],
    [0.00000002101, 5.11361919665, 241.6102710893],
    [0.00000001961, 4.77832385099, 1446.62324515],
    [0.00000002097, 6.06067607224, 570.7447620392],
    [0.00000001983, 1.63014729241, 1432.3961511484],
    [0.00000001608, 4.82672654056, 555.5544601911],
    [0.00000001681, 3.48535837754, 543.1843459133],
    [0.00000001681, 3.99691992442, 516.1975842759],
    [0.0000000162, 2.47519616201, 683.1863154923],
    [0.00000001551, 0.77205866411, 593.426863398],
    [0.00000002066, 0.94018645457, 487.1526954417],
    [0.00000001791, 4.81649259864, 502.6036297207],
    [0.00000001537, 0.19658665242, 1518.2234499796],
    [0.00000001786, 5.4400194865, 1226.2106027112],
    [0.00000001926, 3.25933684213, 229.0800981171],
    [0.00000001583, 6.04740062696, 56.6223513026],
    [0.00000001778, 1.08217421224, 1819.6374661092],
    [0.00000001466, 3.39789528449, 426.5500067662],
    [0.00000001453, 4.90873128164, 216.4804891757],
    [0.00000001484, 2.41545761529, 995.6460318858],
    [0.00000001446, 5.86004559959, 384.0599212231],
    [0.00000001673, 2.6657853579, 556.7783004685],
    [0.00000001573, 6.26225606544, 425.6349830295],
    [0.00000001701, 4.91404545818, 422.405405182],
    [0.00000001449, 1.53424605627, 3686.4961146598],
    [0.00000001674, 0.76441019022, 3583.4033404412],
    [0.00000001414, 4.43084732654, 350.3321196004],
    [0.00000001787, 4.51629855363, 1059.1212977583],
    [0.00000001586, 2.43520096497, 1052.2201990786],
    [0.00000001409, 5.60828366864, 1474.6737883704],
    [0.00000001459, 0.29604013369, 426.6463749858],
    [0.00000001859, 5.87100830303, 313.2104759189],
    [0.0000000186, 5.30369826691, 1160.027023853],
    [0.00000001599, 5.70543219748, 1588.1096874373],
    [0.00000001711, 4.1479901457, 2200.5159935946],
    [0.00000001587, 1.97035308409, 1268.7488723641],
    [0.00000001645, 4.96839068028, 630.3360587584],
    [0.00000001796, 0.70671519409, 424.1505103212],
    [0.00000001802, 0.24899836512, 572.2292347475],
    [0.00000001725, 5.08098401978, 1696.0978227655],
    [0.00000001811, 5.8989386685, 1340.3490771937],
    [0.0000000134, 4.11708835504, 1058.109905802],
    [0.00000001344, 2.57940160402, 252.6559713532],
    [0.00000001497, 0.46005454389, 1379.7059531089],
    [0.00000001346, 5.55344965198, 1066.5436612998],
    [0.00000001479, 5.12078337861, 138.5174968707],
    [0.00000001313, 2.87700461514, 827.9235874865],
    [0.00000001342, 6.27866403575, 1357.6145525811],
    [0.00000001714, 1.09477454512, 1164.9223849626],
    [0.00000001547, 5.14492139001, 1097.514965827],
    [0.00000001293, 1.41574901573, 394.3548619616],
    [0.00000001287, 0.09882825148, 1354.4331588434],
    [0.00000001329, 0.80851044182, 1628.429771199],
    [0.00000001657, 1.38619161291, 473.068613792],
    [0.00000001353, 2.59318399768, 2498.8916283384],
    [0.00000001375, 2.40968289321, 1093.322180133],
    [0.00000001302, 6.0148738192, 494.4786907636],
    [0.00000001266, 4.76726804915, 1162.5228885176],
    [0.00000001234, 0.3261581517, 436.1594184316],
    [0.00000001258, 1.58421626029, 1162.426520298],
    [0.00000001231, 5.30664395399, 414.0680179038],
    [0.00000001419, 1.54073590528, 1138.0956820196],
    [0.00000001394, 5.1564979757, 958.7368365254],
    [0.00000001182, 0.52974408869, 465.9550667912],
    [0.00000001464, 2.33832116265, 1066.4472930802],
    [0.00000001194, 4.20924518474, 774.0095491696],
    [0.00000001176, 4.08167525357, 632.831923423],
    [0.00000001173, 2.04351153153, 2964.8466951296],
    [0.00000001259, 3.56208851883, 990.2294059144],
    [0.0000000117, 3.49511362481, 3693.6096616606],
    [0.00000001235, 6.00673735479, 1027.1386012748],
    [0.00000001192, 1.4674038694, 564.9032394256],
    [0.00000001337, 3.6125336174, 427.5613987225],
    [0.00000001581, 5.13730579856, 642.3449668688],
    [0.00000001186, 3.09979352325, 2114.8317071153],
    [0.00000001451, 6.06457621411, 586.3133163972],
    [0.00000001339, 4.45996853527, 1161.5114965613],
    [0.0000000126, 1.21410714044, 633.7469471597],
    [0.00000001309, 1.91007772946, 1163.4379122543],
    [0.00000001332, 6.07060512898, 981.6313862053],
    [0.00000001309, 2.99122359843, 3473.1970192218],
    [0.00000001172, 0.90155530149, 632.7355552034],
    [0.0000000112, 3.02624536332, 709.0498105888],
    [0.00000001241, 5.23044091775, 269.9214467406],
    [0.0000000134, 4.06427807846, 1060.6539545764],
    [0.00000001212, 4.10341889288, 3590.516887442],
    [0.00000001112, 3.72336688315, 1065.9742123282],
    [0.00000001496, 4.33281936369, 388.4651552382],
    [0.00000001156, 1.65378396735, 102.5715093568],
    [0.00000001089, 3.60592628762, 946.727928415],
    [0.00000001132, 5.22322415543, 1663.8544938511],
    [0.00000001068, 6.04185185868, 1279.794572628],
    [0.00000001131, 3.61191445945, 1887.3055176757],
    [0.00000001473, 4.12139842857, 1436.5407527326],
    [0.00000001045, 4.22116967617, 1570.9136480191],
    [0.00000001302, 2.50289331551, 636.9765250072],
    [0.00000001036, 0.53491669677, 1798.4398374587],
    [0.00000001036, 5.26899994767, 915.235359026],
    [0.00000001395, 0.46166683816, 635.231419868],
    [0.00000001137, 3.27433871912, 447.7958195265],
    [0.00000001025, 5.53132458018, 951.6232895246],
    [0.00000001348, 3.81184021575, 2004.364753465],
    [0.00000001018, 0.87095306528, 623.2225117576],
    [0.00000001021, 2.67952604782, 2730.2069586892],
    [0.00000001428, 4.58431304902, 244.318584075],
    [0.00000001234, 2.88698069188, 1467.8208738005],
    [0.0000000104, 0.83747359097, 313.9441891018],
    [0.00000001369, 2.70606153896, 4590.910180489],
    [0.00000001275, 0.52108766366, 1363.2436268736],
    [0.00000001088, 1.95292844895, 2310.722314814],
    [0.00000001033, 1.08663300387, 1028.3624415522],
    [0.00000001, 0.35908379113, 924.7965865816],
    [0.00000001111, 2.15462122005, 103.6140390804],
    [0.00000001358, 3.05189802975, 448.6895914038],
    [0.0000000098, 1.98911885489, 961.705781942],
    [0.00000000967, 6.06331792493, 665.0270682276],
    [0.00000001219, 4.14432847094, 614.6244920485],
    [0.00000001038, 0.76497233984, 170.7608257851],
    [0.00000000955, 2.14161353973, 645.3139122854],
    [0.00000000933, 5.39590871918, 1578.7779545453],
    [0.00000001139, 4.36540036877, 1052.7896480502],
    [0.00000000927, 2.34037338177, 3796.7024358792],
    [0.00000001243, 3.14898976422, 670.916774951],
    [0.00000001067, 4.16223201017, 799.6124118352],
    [0.00000001035, 1.28671936236, 2545.3620512544],
    [0.00000001048, 0.38010986538, 1901.5326116773],
    [0.00000000976, 6.08656223961, 700.4517908797],
    [0.00000001099, 1.23775171296, 611.5861106627],
    [0.00000001033, 3.86973990762, 631.8205314667],
    [0.0000000096, 6.17390028803, 4863.1979130692],
    [0.00000000875, 1.92996402694, 4127.3213995374],
    [0.00000001194, 4.13143181474, 8521.1198767086],
    [0.00000000967, 4.90660225484, 828.8173593638],
    [0.00000001165, 0.11002151063, 1511.3223512999],
    [0.00000001168, 2.24358551711, 2861.753920911],
    [0.00000001147, 4.05160358756, 1390.0008938474],
    [0.00000000873, 0.21748412885, 322.0209439491],
    [0.00000001137, 5.96450825373, 950.6600816781],
    [0.0000000103, 2.10311707723, 395.105621487],
    [0.00000001156, 5.01608864815, 696.5196376166],
    [0.00000001061, 3.86340607753, 1014.1353475506],
    [0.00000001015, 5.07749588495, 3487.4241132234],
    [0.00000000918, 2.29663466568, 340.7708920448],
    [0.0000000086, 1.59524432991, 1152.9134768522],
    [0.00000000869, 5.53349297622, 215.7467759928],
    [0.00000001113, 6.08107598854, 3384.3313390048],
    [0.00000000844, 3.23872430382, 231.4583427027],
    [0.00000000939, 3.33696304667, 1703.2113697663],
    [0.00000000872, 0.46189921104, 1482.0479678021],
    [0.00000000832, 5.91197785635, 1688.9842757647],
    [0.00000001042, 5.6492552571, 297.6419215609],
    [0.00000000983, 4.50835013554, 1475.6851803267],
    [0.00000000851, 3.96788690898, 5702.1672008196],
    [0.00000001105, 4.6869566995, 1366.2125722902],
    [0.00000000877, 1.00645136806, 357.4456666012],
    [0.00000000987, 2.2025444078, 7210.9158184942],
    [0.00000001109, 5.81960537254, 347.8844390456],
    [0.00000000992, 4.48964897088, 4120.2078525366],
    [0.00000000827, 5.97494310096, 20956.2620575166],
    [0.00000000811, 5.1591358003, 5282.6825569444],
    [0.00000000914, 0.28107178678, 1031.0707545379],
    [0.00000000999, 2.29914905811, 1505.6932770074],
    [0.00000001012, 4.06912229625, 1681.1199692385],
    [0.00000001093, 1.74052459203, 761.7400086283],
    [0.00000001118, 1.45389907306, 892.5532576672],
    [0.00000000883, 4.10460162145, 526.1678467456],
    [0.00000000883, 3.37767668051, 533.2140834436],
    [0.0000000098, 4.65213623657, 25035.6347583858],
    [0.00000000787, 2.68667239235, 1056.6736172035],
    [0.00000000787, 4.43959540351, 432.0148168474],
    [0.00000000839, 5.03969297034, 4686.8894077068],
    [0.00000000965, 5.19162112321, 1519.920371009],
    [0.00000001017, 1.6592846226, 1019.7644218431],
    [0.00000000929, 0.76029521873, 1130.2313754934],
    [0.00000000781, 4.82412022465, 2225.7887878601],
    [0.00000000983, 2.38789107713, 1670.0742689746],
    [0.0000000095, 1.75053669314, 25021.4076643842],
    [0.00000000933, 3.86854645253, 2516.9078632512],
    [0.00000000809, 1.93195701192, 348.635198571],
    [0.00000000841, 1.57805339944, 643.0786800517],
    [0.00000000981, 4.48946441703, 1288.4620283063],
    [0.00000000782, 0.66782646307, 1731.5225454176],
    [0.00000000817, 1.92690312543, 1372.5924061081],
    [0.00000001032, 3.19968565901, 3075.053016349],
    [0.00000000793, 0.03897871144, 5092.1519581158],
    [0.00000000899, 5.79764466292, 1053.1621550657],
    [0.00000000742, 0.43265335833, 896.4854109303],
    [0.00000000989, 2.27910418594, 566.3395280241],
    [0.00000000989, 5.20317411602, 493.0424021651],
    [0.00000000839, 6.03327141522, 3700.7232086614],
    [0.00000000742, 2.64617353154, 948.2124011233],
    [0.00000000756, 0.57260333982, 172.2452984934],
    [0.00000000766, 3.02399211768, 402.2191684878],
    [0.00000000746, 0.30715456859, 745.4377410874],
    [0.0000000087, 0.72037948511, 537.3257769572],
    [0.0000000087, 3.62030616326, 522.056153232],
    [0.00000000789, 0.10006236928, 950.1388168163],
    [0.00000000732, 3.8587250033, 1600.1185955477],
    [0.00000000769, 2.20223682113, 6011.4455234754],
    [0.00000000985, 0.24088992371, 1262.3860848887],
    [0.00000000773, 0.1816555677, 8617.0991039264],
    [0.00000000924, 1.93653062696, 1818.1529934009],
    [0.00000000735, 0.3347429228, 64.9597385808],
    [0.0000000078, 6.07428087424, 949.12742486],
    [0.00000000736, 4.07491885224, 23969.1392811958],
    [0.00000000865, 0.10126946188, 3899.7952100978],
    [0.00000000707, 0.60198922161, 292.0128472684],
    [0.00000000705, 2.70032710795, 259.769518354],
    [0.00000000712, 4.70959378269, 2108.4689196399],
    [0.00000000901, 1.24670020211, 3259.1471642584],
    [0.00000000712, 1.23230262093, 4002.8879843164],
    [0.00000000705, 4.5529097747, 657.1627617014],
    [0.00000000964, 2.76604156225, 6915.8595893046],
    [0.00000000968, 5.5196442054, 806.725958836],
    [0.00000000889, 4.95719313311, 157.2674449664],
    [0.0000000081, 1.91237826709, 677.7696895209],
    [0.00000000912, 1.19262236749, 1791.3262904579],
    [0.00000000789, 0.62852846984, 703.6331846174],
    [0.00000000759, 5.69883291812, 1542.6024723678],
    [0.00000000673, 1.85729207623, 77.962992305],
    [0.00000000685, 5.20938711928, 2218.6752408593],
    [0.00000000748, 2.39982571743, 1997.5118388951],
    [0.00000000804, 2.91740270997, 1141.1340634054],
    [0.00000000856, 2.44397416548, 369.0820676961],
    [0.00000000815, 0.85095606739, 358.9301393095],
    [0.00000000744, 0.94568343594, 98.8999885246],
    [0.00000000923, 4.75881563433, 179.3588454942],
    [0.00000000704, 5.19559600972, 718.6110381444],
    [0.00000000765, 0.82175084218, 1834.6153196362],
    [0.00000000743, 6.05727858122, 306.0969289181],
    [0.00000000774, 3.70232316078, 2431.9743362973],
    [0.00000000798, 3.06786502961, 377.1588225434],
    [0.00000000639, 4.7935213234, 650.9429865779],
    [0.00000000643, 0.91695869024, 208.633228992],
    [0.00000000644, 2.20059124309, 1304.9243545416],
    [0.00000000851, 3.8406910947, 2124.9836355019],
    [0.00000000666, 1.4776251948, 2439.0878832981],
    [0.00000000642, 1.77466267233, 4113.0943055358],
    [0.00000000886, 4.54581008875, 110.1581371096],
    [0.00000000699, 2.04086900264, 999.5781851489],
    [0.00000000848, 3.15427263274, 444.7574381407],
    [0.00000000649, 5.11797569203, 203.7378678824],
    [0.00000000772, 0.19013329644, 3333.9287628257],
    [0.00000000781, 2.37931191817, 2416.9964827703],
    [0.00000000629, 1.93229139868, 181.806526049],
    [0.0000000082, 2.58299952484, 1371.8416465827],
    [0.00000000634, 1.62415516807, 5908.3527492568],
    [0.00000000639, 2.75957878564, 100.1720129118],
    [0.00000000869, 4.19129690244, 10846.0692855242],
    [0.00000000765, 5.21743833145, 927.8349679674],
    [0.0000000065, 1.16668662255, 558.1451530978],
    [0.00000000776, 1.74660591915, 711.4974911436],
    [0.00000000621, 3.48991816372, 4539.6924964118],
    [0.00000000611, 1.65684132714, 4443.713269194],
    [0.00000000751, 1.10211044043, 446.3113468182],
    [0.00000000726, 0.52382471288, 2151.0071892928],
    [0.00000000753, 2.45390180994, 88.1149206916],
    [0.00000000614, 2.12029152108, 6121.6518446948],
    [0.00000000655, 4.657920945, 1809.4855377226],
    [0.00000000727, 1.1263281517, 425.1137181677],
    [0.00000000614, 2.31607307821, 1144.3154571431],
    [0.00000000641, 6.09076267405, 52175.8062831484],
    [0.00000000617, 3.1666852307, 4856.0843660684],
    [0.00000000596, 1.00488460547, 737.3609862401],
    [0.00000000619, 2.80074763053, 325.9530972122],
    [0.00000000715, 5.80133940123, 385.5443939314],
    [0.00000000617, 2.17399797113, 920.8644333185],
    [0.0000000059, 1.05345868825, 3634.6210245184],
    [0.0000000059, 2.98689226579, 627.3671133418],
    [0.00000000611, 0.43380344797, 392.6579409322],
    [0.00000000611, 0.76528954681, 666.723989257],
    [0.0000000063, 2.45241625357, 1751.539531416],
    [0.00000000716, 1.61483523862, 3333.498879699],
    [0.00000000715, 4.50654502617, 3347.7259737006],
    [0.00000000604, 5.25312756839, 427.1194557378],
    [0.00000000578, 5.39625376106, 881.5075574033],
    [0.00000000602, 5.73928138925, 1670.8250285],
    [0.00000000571, 1.69274759242, 1937.7080938548],
    [0.00000000581, 3.86128267375, 2953.8009948657],
    [0.00000000754, 2.66282639252, 1022.7333672597],
    [0.00000000736, 0.59694347292, 601.5036182453],
    [0.00000000736, 0.60214952186, 457.8783119439],
    [0.00000000693, 3.40651887511, 1967.7161905355],
    [0.00000000692, 2.7951080582, 3789.5888888784],
    [0.00000000561, 3.91963066988, 443.8636662634],
    [0.00000000708, 3.02690614133, 3391.4448860056],
    [0.00000000778, 3.25499863195, 90.5626012464],
    [0.00000000561, 2.5102067285, 20426.571092422],
    [0.00000000553, 2.13906734615, 153.4953503977],
    [0.00000000554, 2.66966231964, 385.7568422525],
    [0.00000000551, 5.94541582437, 4333.5069479746],
    [0.00000000605, 4.46112893899, 835.7878940127],
    [0.00000000711, 1.10969378034, 451.7279727896],
    [0.0000000056, 3.13972333555, 420.9691165835],
    [0.00000000579, 5.96205182739, 5179.5897827258],
    [0.00000000561, 0.89037751064, 6702.5604938666],
    [0.0000000056, 2.10160839294, 4701.1165017084],
    [0.00000000556, 4.53953488781, 4804.209275927],
    [0.00000000575, 6.12046354156, 1656.7409468503],
    [0.00000000559, 3.70916861075, 388.7257876691],
    [0.00000000538, 2.49910108716, 7564.830720738],
    [0.00000000727, 5.7073797151, 344.7030453079],
    [0.00000000549, 2.31469925514, 10632.7701900862],
    [0.00000000657, 0.6270255557, 464.7312265138],
    [0.00000000615, 2.00048473575, 3494.5376602242],
    [0.00000000601, 4.7325453333, 426.0769260142],
    [0.00000000525, 4.24507155073, 76674.63652943878],
    [0.00000000527, 5.96328911375, 8734.4189721466],
    [0.00000000516, 4.97616716669, 5599.074426601],
    [0.00000000605, 1.49901582841, 207.6700211455],
    [0.00000000507, 3.50263074303, 615.5182639258],
    [0.000000007, 5.07945263007, 3184.3655656911],
    [0.00000000599, 2.57804574588, 184.9879197867],
    [0.00000000636, 6.02243533622, 10110.1927719924],
    [0.00000000568, 0.36654156763, 131.4039498699],
    [0.00000000516, 3.70540463468, 6018.5590704762],
    [0.00000000523, 3.92581999922, 3906.9087570986],
    [0.00000000613, 0.15989670053, 607.6539573996],
    [0.00000000583, 3.3500074589, 4326.3934009738],
    [0.00000000598, 0.51769443783, 115.6229471908],
    [0.00000000593, 0.62671244929, 758.7710632117],
    [0.00000000602, 5.52925928036, 680.7386349375],
    [0.00000000641, 5.93127310899, 421.93232443],
    [0.00000000496, 5.5069944979, 2328.8815620787],
    [0.00000000674, 5.1473052626, 282.4516197128],
    [0.00000000494, 4.88930673362, 536.05375257],
    [0.00000000494, 5.73456422193, 523.3281776192],
    [0.00000000503, 0.6623718526, 1443.4418514123],
    [0.00000000592, 0.48058901083, 106.0135355254],
    [0.00000000606, 4.74080637045, 3803.81598288],
    [0.00000000625, 1.34524913881, 119.767548775],
    [0.00000000657, 0.40021926878, 2350.8129039121],
    [0.00000000527, 4.42652413951, 4436.5997221932],
    [0.00000000664, 3.35115576269, 127.4717966068],
    [0.00000000662, 3.06514170953, 4959.177140287],
    [0.00000000488, 3.30536438368, 419.532827985],
    [0.00000000636, 5.51768568959, 664.2763087022],
    [0.00000000495, 1.58075964209, 398.2870152247],
    [0.00000000628, 4.75127425715, 1560.6187072806],
    [0.000000005, 3.44000835802, 8631.326197928],
    [0.00000000474, 0.04770076651, 102.3420146932],
    [0.00000000589, 0.26867746379, 2740.5018994277],
    [0.000000006, 0.00176767996, 634.2682120215],
    [0.00000000474, 3.61718578829, 2203.6973873323],
    [0.00000000511, 1.7821225545, 207.1487562837],
    [0.00000000515, 4.5658398488, 1090.8744995782],
    [0.00000000479, 3.69565474758, 218.7157214094],
    [0.00000000549, 0.85225402277, 701.936263588],
    [0.00000000468, 1.82146214833, 477.0007670551],
    [0.00000000468, 5.66081615363, 582.3811631341],
    [0.00000000496, 3.01514968503, 2758.6611466924],
    [0.00000000543, 6.27930493432, 578.449009871],
    [0.00000000543, 1.20297336764, 480.9329203182],
    [0.00000000505, 0.44577011956, 398.1440028728],
    [0.0000000048, 2.53110795595, 3046.5988283458],
    [0.00000000573, 6.09163052699, 1132.6790560482],
    [0.00000000468, 0.18128030054, 419.4364597654],
    [0.0000000048, 2.95348186297, 2132.99095438],
    [0.00000000472, 3.76379829341, 103.843533744],
    [0.00000000467, 0.49089030603, 2047.9144150742],
    [0.00000000463, 4.21399976185, 429.5189521828],
    [0.00000000472, 1.62568669915, 2527.2028039897],
    [0.00000000461, 1.80025087977, 177.8743727859],
    [0.00000000451, 3.62252628618, 1457.525933062],
    [0.00000000451, 2.46062696619, 10977.078804699],
    [0.00000000534, 2.70956518248, 843.6351541964],
    [0.00000000471, 2.88669732848, 2572.1887541974],
    [0.00000000558, 0.57206557222, 594.6507036754],
    [0.00000000588, 0.10679818786, 458.090760265],
    [0.00000000464, 5.97996999324, 4017.115078318],
    [0.00000000482, 2.66182113624, 6114.538297694],
    [0.00000000449, 6.27506282835, 1221.8485663214],
    [0.00000000447, 3.83471115676, 475.3562356524],
    [0.00000000447, 3.6475671452, 584.0256945368],
    [0.00000000466, 2.22914602566, 632.2624744514],
    [0.00000000605, 3.46943333342, 300.6108669775],
    [0.00000000624, 1.32803409508, 10529.6774158676],
    [0.00000000487, 0.70358405204, 321.0577361026],
    [0.00000000442, 6.00134152023, 109.6850563576],
    [0.00000000543, 0.48848038573, 3914.0223040994],
    [0.00000000558, 6.11657983138, 2199.7652340692],
    [0.00000000522, 1.28108103701, 383.0967133766],
    [0.00000000442, 4.84282576196, 2936.3925071264],
    [0.00000000524, 0.03009305276, 1336.4169239306],
    [0.0000000045, 1.45745967104, 540.9972977894],
    [0.0000000045, 2.88322597733, 518.3846323998],
    [0.00000000466, 4.77540191622, 733.428832977],
    [0.00000000465, 2.19694664935, 1083.7609525774],
    [0.00000000605, 6.19042796666, 6599.467719648],
    [0.00000000602, 0.32017022594, 354.5249052944],
    [0.00000000602, 0.87892276884, 704.8570248948],
    [0.00000000437, 4.92559532055, 2535.0671105159],
    [0.00000000579, 0.71604969737, 597.5714649822],
    [0.00000000579, 0.48304329741, 461.810465207],
    [0.00000000523, 3.66903787035, 2424.1100297711],
    [0.0000000048, 3.58335890884, 1105.8523531052],
    [0.0000000058, 2.47100192063, 2100.6046131137],
    [0.00000000561, 5.1930699886, 1858.9943420244],
    [0.00000000418, 4.24022932943, 205.2223405907],
    [0.00000000442, 5.80146904507, 1068.9431577448],
    [0.00000000419, 3.18915415915, 2090.3096723752],
    [0.00000000432, 4.43898680981, 2080.6308247406],
    [0.00000000415, 1.39174996628, 4760.1051388506],
    [0.00000000542, 2.11744681585, 85.8272988312],
    [0.00000000451, 1.43760446178, 206.1373643274],
    [0.00000000556, 3.25263620772, 1595.2926704073],
    [0.00000000558, 5.74254657754, 2347.8439584955],
    [0.0000000041, 0.56301185652, 7.8643065262],
    [0.00000000493, 5.04782378272, 2879.0193962984],
    [0.00000000551, 0.72617989359, 8837.5117463652],
    [0.00000000432, 6.00835189765, 1300.9922012785],
    [0.00000000429, 1.26761639656, 4635.6717236296],
    [0.00000000545, 2.06900453375, 2004.6253858959],
    [0.00000000463, 2.74972811778, 633.305004175],
    [0.00000000476, 3.5321509897, 2833.2997329078],
    [0.00000000412, 4.49217479834, 2542.1806575167],
    [0.00000000469, 5.20635692603, 2274.5468326365],
    [0.00000000465, 3.6230678879, 4010.0015313172],
    [0.00000000399, 1.89120860742, 1621.3162241982],
    [0.00000000421, 4.17496784439, 638.4128136057],
    [0.00000000483, 0.89846608938, 154.2984995498],
    [0.00000000394, 4.47940534021, 2424.8607892965],
    [0.00000000412, 2.38738335229, 83.3796182764],
    [0.00000000384, 4.81260634232, 673.6250879367],
    [0.0000000048, 4.83228035316, 9050.8108418032],
    [0.000000004, 1.20409319679, 2755.4797529547],
    [0.00000000499, 5.48470112681, 1973.1328165069],
    [0.00000000391, 3.77310038627, 670.6561425201],
    [0.00000000396, 1.19425682508, 50586.73338786459],
    [0.00000000468, 4.28224331796, 1970.6851359521],
    [0.00000000404, 1.95147636572, 6327.837393132],
    [0.0000000047, 6.23427028473, 878.3261636656],
    [0.00000000472, 0.93318411225, 416.7763308895],
    [0.00000000443, 5.22068474603, 1987.2168981566],
    [0.00000000491, 1.09229246916, 601.2911699242],
    [0.00000000503, 1.62796162151, 5856.4776591154],
    [0.00000000467, 4.62700522628, 2654.6746005965],
    [0.00000000397, 3.56270803011, 5371.5482371614],
];

const Y1: &[Term] = &[
    [0.01694798253, PI, 0.0],
    [0.00634859798, 4.8190319965, 1059.3819301892],
    [0.00601160431, 0.8581124994, 522.5774180938],
    [0.00588928504, 0.3449157689, 536.8045120954],
    [0.00081187145, 1.90914316532, 7.1135470008],
    [0.0004688809, 1.91294535618, 529.6909650946],
    [0.00046194129, 5.16955994561, 1589.0728952838],
    [0.00032503453, 0.17640743623, 1052.2683831884],
    [0.00031231694, 0.77623645597, 1066.49547719],
    [0.00019462096, 3.0095711947, 110.2063212194],
    [0.00017738615, 2.46531787101, 426.598190876],
    [0.00013701692, 5.02070197804, 632.7837393132],
    [0.00013034616, 0.98979834442, 515.463871093],
    [0.0000912266, 0.21022587969, 543.9180590962],
    [0.0000810905, 4.58123811601, 949.1756089698],
    [0.00007145229, 1.60381236094, 323.5054166574],
    [0.00003957592, 6.18550697817, 206.1855484372],
    [0.00004347346, 5.85522835488, 735.8765135318],
    [0.00003401735, 1.33033225252, 526.5095713569],
    [0.00003331887, 6.14951835712, 532.8723588323],
    [0.00003866147, 1.76877582038, 14.2270940016],
    [0.00003094257, 1.00670454701, 419.4846438752],
    [0.00003044205, 0.08329779827, 525.7588118315],
    [0.00003001484, 1.11280606283, 533.6231183577],
    [0.00002977284, 3.35507028507, 103.0927742186],
    [0.000023471, 2.0678177539, 316.3918696566],
    [0.00002990192, 5.51944830506, 2118.7638603784],
    [0.00001875464, 5.32657356489, 742.9900605326],
    [0.00001854067, 1.19908734197, 1596.1864422846],
    [0.00001968401, 3.51896739844, 956.2891559706],
    [0.00001808627, 5.40287543026, 95.9792272178],
    [0.00001530472, 2.75094722237, 117.3198682202],
    [0.00001885393, 0.2990597371, 1581.959348283],
    [0.00001516541, 6.21684203571, 639.897286314],
    [0.00001636913, 6.09270756447, 1045.1548361876],
    [0.00001260123, 0.07143173954, 625.6701923124],
    [0.00001028165, 1.00301485824, 433.7117378768],
    [0.00001035933, 0.98273794152, 1265.5674786264],
    [0.00000972507, 0.6383264636, 220.4126424388],
    [0.00000983542, 6.14294208089, 1169.5882514086],
    [0.00000778705, 4.83558543631, 942.062061969],
    [0.00000886143, 1.10269264426, 309.2783226558],
    [0.00000841776, 0.18391927728, 1155.361157407],
    [0.00000767993, 4.84778769533, 1162.4747044078],
    [0.00000541536, 2.66914118638, 853.196381752],
    [0.00000492134, 0.10409782456, 199.0720014364],
    [0.00000482717, 4.31776421398, 1692.1656695024],
    [0.00000551952, 5.72755176773, 213.299095438],
    [0.00000474411, 0.05053932644, 838.9692877504],
    [0.00000499533, 1.45057427365, 330.6189636582],
    [0.00000383799, 0.60154705725, 1073.6090241908],
    [0.00000411804, 5.82478065965, 728.762966531],
    [0.00000411901, 4.63999690546, 1478.8665740644],
    [0.00000233099, 1.13630657752, 508.3503240922],
    [0.00000249127, 0.16936457581, 1272.6810256272],
    [0.00000198812, 1.38931486346, 1375.7737998458],
    [0.00000203327, 1.40700481195, 3.1813937377],
    [0.00000213809, 6.16969757489, 412.3710968744],
    [0.00000181689, 2.07919238257, 1368.660252845],
    [0.00000174422, 0.28157513496, 1062.5633239269],
    [0.00000189289, 5.86994869354, 2648.454825473],
    [0.0000016741, 0.94422476456, 1258.4539316256],
    [0.00000155276, 2.11664870228, 3.9321532631],
    [0.00000161385, 1.44976282992, 519.3960243561],
    [0.00000144101, 0.51310291971, 1055.4497769261],
    [0.00000126747, 1.74459905872, 1063.3140834523],
    [0.00000124724, 0.04994633125, 551.031606097],
    [0.00000125496, 6.02560740802, 539.9859058331],
    [0.00000146632, 1.15160857972, 1056.2005364515],
    [0.00000115875, 1.61097972819, 2125.8774073792],
    [0.00000117096, 5.45594228337, 1471.7530270636],
    [0.00000142963, 0.02661259114, 1574.8458012822],
    [0.00000114195, 0.48862834603, 227.5261894396],
    [0.00000143564, 4.51347077218, 1485.9801210652],
    [0.00000097794, 0.44122492626, 2111.6503133776],
    [0.00000093129, 0.28789327738, 1699.2792165032],
    [0.0000008283, 6.00256748408, 440.8252848776],
    [0.00000099934, 1.09427323363, 618.5566453116],
    [0.00000103165, 1.14841399801, 302.164775655],
    [0.00000102127, 1.62710552101, 21.3406410024],
    [0.00000078185, 3.52291643865, 525.0250986486],
    [0.00000074073, 0.0059620237, 647.0108333148],
    [0.00000074807, 3.9578798754, 534.3568315406],
    [0.00000087844, 0.18833403824, 831.8557407496],
    [0.00000061943, 4.67305937908, 2221.856634597],
    [0.00000053422, 4.15773861872, 2008.557539159],
    [0.0000006689, 0.70927232633, 1685.0521225016],
    [0.00000052789, 6.10373692289, 1038.0412891868],
    [0.00000046409, 0.92753244625, 524.2743391232],
    [0.00000049463, 1.18264387489, 963.4027029714],
    [0.00000045782, 0.27156053621, 535.107591066],
    [0.00000054236, 0.01818231207, 750.1036075334],
    [0.00000043364, 5.12070235817, 149.5631971346],
    [0.00000056181, 1.05958309043, 1795.258443721],
    [0.00000039365, 3.24874113885, 1382.8873468466],
    [0.00000038663, 5.95486778331, 511.5317178299],
    [0.00000036523, 1.51420033895, 547.8502123593],
    [0.00000035968, 1.26252623906, 10.2949407385],
    [0.00000036868, 6.25234819034, 526.7702037878],
    [0.00000036603, 1.23015782265, 532.6117264014],
    [0.00000030709, 2.5594821991, 124.433415221],
    [0.0000002789, 0.13975598355, 1802.3719907218],
    [0.00000030391, 3.22478860355, 846.0828347512],
    [0.00000030163, 1.34324693327, 1898.3512179396],
    [0.00000025353, 0.24938499571, 540.7366653585],
    [0.00000022442, 5.93438363618, 1148.2476104062],
    [0.00000026652, 1.48193861065, 1905.4647649404],
    [0.00000022688, 5.52878572537, 934.9485149682],
    [0.00000018196, 2.37271651784, 909.8187330546],
    [0.00000017089, 0.99046298511, 1603.2999892854],
    [0.00000017538, 4.47072665413, 525.4981794006],
    [0.00000017368, 3.01139900055, 533.8837507886],
    [0.00000017457, 4.81938440224, 76.2660712756],
    [0.00000018148, 3.41220760474, 106.2741679563],
    [0.00000016135, 5.85989460981, 99.9113804809],
    [0.00000019261, 2.61311520085, 1361.5467058442],
    [0.00000015992, 0.28205243773, 191.9584544356],
    [0.00000019603, 5.81126286038, 1788.1448967202],
    [0.00000014673, 0.17408284113, 518.6452648307],
    [0.00000014747, 0.47450508591, 1049.0869894507],
    [0.00000017622, 2.07021300312, 88.865680217],
    [0.00000017237, 2.88893939443, 18.1592472647],
    [0.00000017683, 1.96272991381, 860.3099287528],
    [0.00000011395, 5.26261384784, 1464.6394800628],
    [0.00000011742, 6.2174754541, 3178.1457905676],
    [0.00000014681, 1.29179190664, 337.732510659],
    [0.00000014886, 4.90997527988, 107.0249274817],
    [0.00000011204, 4.74151565288, 99.1606209555],
    [0.00000010833, 3.92635810658, 11.0457002639],
    [0.00000011669, 0.86641948321, 2214.7430875962],
    [0.00000013929, 6.17036092151, 721.6494195302],
    [0.00000012278, 5.65264690988, 2104.5367663768],
    [0.00000010939, 0.71222731144, 1251.3403846248],
    [0.00000011017, 3.18646798405, 604.4725636619],
    [0.00000011026, 5.28388535292, 2015.6710861598],
    [0.00000008957, 4.48061869248, 92.0470739547],
    [0.00000010028, 3.9476685717, 497.4476361802],
    [0.00000010134, 0.68933796308, 1592.2542890215],
    [0.00000010812, 0.05745880472, 1891.2376709388],
    [0.00000008447, 0.96776660732, 1585.1407420207],
    [0.00000009172, 3.54380107143, 561.934294009],
    [0.00000010215, 4.40184348382, 454.9093665273],
    [0.00000010858, 2.27877819022, 113.3877149571],
    [0.00000008018, 0.05624075316, 629.6023455755],
    [0.00000008557, 1.00607595477, 224.3447957019],
    [0.00000007292, 1.12703938941, 429.7795846137],
    [0.0000000759, 3.72659991001, 39.3568759152],
    [0.00000007544, 0.76057765355, 2228.9701815978],
    [0.00000007709, 6.01459194385, 636.7158925763],
    [0.00000007357, 2.0774222596, 2655.5683724738],
    [0.00000007334, 3.90865182026, 530.44172462],
    [0.00000007334, 3.5736264817, 528.9402055692],
    [0.00000008072, 1.31940181731, 1585.8915015461],
    [0.00000007085, 5.85909901313, 1158.5425511447],
    [0.00000007688, 0.70634789911, 2001.4439921582],
    [0.00000007105, 3.52235507593, 1048.3362299253],
    [0.00000008989, 4.8993956558, 114.1384744825],
    [0.00000007644, 3.78622130562, 121.2520214833],
    [0.00000006822, 0.88572352734, 312.4597163935],
    [0.00000007022, 4.91750543677, 953.1077622329],
    [0.00000006467, 5.5489762705, 1165.6560981455],
    [0.00000006353, 0.77690107419, 1159.2933106701],
    [0.0000000657, 4.80752283462, 635.9651330509],
    [0.00000007531, 6.26541380179, 1567.7322542814],
    [0.0000000651, 4.52827964645, 2538.2485042536],
    [0.00000006175, 2.6491276756, 983.1158589136],
    [0.00000005841, 0.50541468252, 1166.4068576709],
    [0.00000005767, 0.02130325225, 387.2413149608],
    [0.00000005656, 0.07140221683, 70.8494453042],
    [0.00000007545, 1.60239307325, 405.2575498736],
    [0.00000005547, 1.62620023863, 611.4430983108],
    [0.0000000559, 0.34952070553, 234.6397364404],
    [0.00000005671, 4.94594693828, 1041.2226829245],
    [0.00000005996, 1.17778867729, 319.5732633943],
    [0.00000005498, 1.45616828, 422.6660376129],
    [0.00000005519, 2.07020506527, 1593.0050485469],
    [0.00000005189, 5.63082164988, 447.9388318784],
    [0.00000005286, 2.89187059401, 505.3119427064],
    [0.00000006907, 6.10591436468, 305.3461693927],
    [0.00000005836, 2.54212786208, 458.8415197904],
    [0.00000005298, 2.64820864276, 423.4167971383],
    [0.00000005544, 2.84780120488, 437.6438911399],
    [0.0000000638, 5.07465796092, 2751.5475996916],
    [0.00000004972, 4.59040744235, 554.0699874828],
    [0.00000005942, 1.75506064905, 512.2824773553],
    [0.00000004807, 0.26863943289, 494.2662424425],
    [0.00000005306, 0.11969594807, 1069.6768709277],
    [0.00000004645, 5.07925345397, 1781.0313497194],
    [0.00000005477, 3.44336586906, 2324.9494088156],
    [0.00000005203, 0.30884116137, 498.6714764576],
    [0.00000004424, 6.01351507645, 210.1177017003],
    [0.00000004359, 1.33181294212, 672.1406152284],
    [0.00000004397, 0.93048360298, 565.1156877467],
    [0.00000004611, 5.66081575236, 679.2541622292],
    [0.00000005248, 5.11443042599, 945.9942152321],
    [0.00000004702, 4.62820043054, 621.7380390493],
    [0.00000004812, 0.890251404, 560.7104537316],
    [0.00000004406, 2.38746661175, 81.7521332162],
    [0.00000004305, 1.60213165112, 1070.4276304531],
    [0.00000004781, 4.94272065629, 600.5404103988],
    [0.00000004148, 0.34385943693, 1080.7225711916],
    [0.00000004092, 0.27540506225, 643.8294395771],
    [0.000000044, 5.53774020911, 628.8515860501],
    [0.00000005372, 5.86592545517, 2207.6295405954],
    [0.00000004612, 3.96539290551, 32.2433289144],
    [0.00000003845, 0.0268783762, 970.5162499722],
    [0.00000003898, 4.36796507234, 1064.0477966352],
    [0.00000004009, 3.61406919649, 952.3570027075],
    [0.0000000388, 3.72470845935, 504.561183181],
    [0.00000004462, 0.25128459874, 835.0371344873],
    [0.00000004981, 1.25438032395, 295.0512286542],
    [0.00000004567, 0.11329133595, 757.2171545342],
    [0.00000003965, 6.0521934101, 501.3797894433],
    [0.00000003861, 0.16362815949, 746.9222137957],
    [0.00000004431, 1.73689576907, 430.5303441391],
    [0.0000000365, 4.63685741915, 2420.9286360334],
    [0.00000003643, 3.75756954654, 554.8207470082],
    [0.0000000416, 0.45778233334, 824.7421937488],
    [0.00000003486, 0.90717666812, 2317.8358618148],
    [0.00000003693, 1.43008452935, 558.0021407459],
    [0.00000004073, 6.15464714899, 739.8086667949],
    [0.00000003303, 1.42720313539, 501.2367770914],
    [0.00000004224, 5.65691659614, 547.0994528339],
    [0.00000003214, 4.63994266567, 498.1983957056],
    [0.00000003501, 2.36612663742, 320.3240229197],
    [0.00000003703, 1.63373351464, 1493.093668066],
    [0.00000003148, 5.15766194631, 654.1243803156],
    [0.00000003357, 2.02753125717, 6275.9623029906],
    [0.00000002969, 2.84233520507, 561.1835344836],
    [0.0000000303, 3.64777234822, 1912.5783119412],
    [0.00000003251, 1.48666767532, 6290.1893969922],
    [0.00000003076, 3.34580219444, 1677.9385755008],
    [0.0000000283, 0.77469965362, 2641.3412784722],
    [0.0000000314, 3.45003804769, 10206.1719992102],
    [0.00000003116, 1.34770723612, 483.2205421786],
    [0.00000002968, 0.95733368724, 597.3590166611],
    [0.00000003023, 3.68951807384, 938.1299087059],
    [0.00000003496, 3.80583016563, 1054.7160637432],
    [0.00000002741, 5.88379306688, 1151.4290041439],
    [0.00000002924, 0.69505079749, 415.5524906121],
    [0.0000000304, 2.90970123602, 10220.3990932118],
    [0.00000002783, 5.26062724438, 209.3669421749],
    [0.0000000272, 1.00934911898, 326.6868103951],
    [0.00000002672, 0.39245063721, 521.8266585684],
    [0.00000002672, 0.80664235757, 537.5552716208],
    [0.00000002599, 6.2136685551, 960.2213092337],
    [0.00000002658, 1.14453224197, 1061.829610744],
    [0.00000002847, 1.35110287281, 1176.7017984094],
    [0.00000002545, 4.77646044599, 1098.7388061044],
    [0.00000003091, 0.28283825059, 2332.0629558164],
    [0.00000002658, 5.35693010643, 1056.9342496344],
    [0.0000000334, 0.89694401439, 2531.1349572528],
    [0.00000003075, 6.2750857089, 462.0229135281],
    [0.00000002804, 6.16566371601, 576.1613880106],
    [0.00000002994, 3.654725741, 230.5645708254],
    [0.00000002346, 3.31946563103, 945.2434557067],
    [0.00000002339, 0.00663392327, 460.5384408198],
    [0.00000002287, 4.80075294106, 2097.423219376],
    [0.00000002748, 5.44723105301, 2524.021410252],
    [0.0000000233, 2.61193168127, 849.2642284889],
    [0.00000002992, 0.59496009117, 203.0041546995],
    [0.00000002256, 1.40980672956, 1053.9653042178],
    [0.00000002189, 3.11418199665, 1514.2912967165],
    [0.00000002373, 4.07778996079, 523.4711899711],
    [0.00000002373, 3.40448834117, 535.9107402181],
    [0.00000002047, 1.13140977147, 988.532484885],
    [0.00000002105, 1.65182568239, 1059.3337460794],
    [0.00000002369, 6.18956428442, 732.6951197941],
    [0.00000002015, 1.84497496112, 46.470422916],
    [0.00000002005, 3.91183410083, 731.9443602687],
    [0.00000001997, 0.01573565092, 504.4181708291],
    [0.00000002033, 0.46619876707, 1173.5204046717],
    [0.00000002284, 1.11740659058, 528.0464336919],
    [0.00000002284, 0.0816864042, 531.3354964973],
    [0.00000002226, 0.29140866606, 5230.807466803],
    [0.00000002084, 3.79496268497, 490.3340891794],
    [0.0000000202, 3.27527557464, 567.8240007324],
    [0.00000001939, 0.63756905811, 1064.7985561606],
    [0.00000002346, 4.61879426619, 739.0579072695],
    [0.00000001905, 1.9407611888, 1077.5411774539],
    [0.0000000205, 5.31232261606, 195.1398481733],
    [0.00000001874, 1.18335705821, 554.9637593601],
    [0.00000002388, 2.65750056379, 334.5511169213],
    [0.00000002111, 0.80586078544, 5216.5803728014],
    [0.00000002086, 1.74158554893, 1062.302691496],
    [0.00000002069, 1.71509396441, 9161.0171630226],
    [0.00000001809, 3.99744410279, 491.5579294568],
    [0.00000002002, 5.91194040806, 142.4496501338],
    [0.00000001892, 3.68925347774, 569.0478410098],
    [0.00000001778, 2.95457611984, 842.1506814881],
    [0.00000001773, 1.30351669897, 67.6680515665],
    [0.00000001965, 2.22838539482, 9146.790069021],
    [0.00000001684, 0.96891211772, 598.8434893694],
    [0.00000001666, 4.51582119325, 1058.4187223427],
    [0.00000002105, 4.84963681002, 1059.430114299],
    [0.00000001684, 4.4225272018, 2737.32050569],
    [0.00000001966, 6.06718677944, 416.3032501375],
    [0.00000002106, 6.18783647179, 1884.124123938],
    [0.00000001546, 3.68581978626, 327.4375699205],
    [0.00000001508, 0.57548049059, 2634.2277314714],
    [0.00000001493, 5.35652330214, 3067.9394693482],
    [0.00000001554, 1.65638330653, 2435.155730035],
    [0.00000001555, 4.59532158728, 202.2533951741],
    [0.00000001437, 0.15153485897, 1056.4611688824],
    [0.00000001666, 1.98564123475, 1060.3451380357],
    [0.00000001454, 4.4016049925, 2854.6403739102],
    [0.00000001646, 3.31967758578, 299.1263942692],
    [0.00000001879, 1.70024089685, 528.2064923863],
    [0.00000001879, 5.78203740511, 531.1754378029],
    [0.00000001693, 4.87451214007, 724.8308132679],
    [0.00000001827, 1.10955453764, 1364.7280995819],
    [0.00000001343, 1.93869519971, 916.9322800554],
    [0.00000001498, 3.83212858272, 1134.1635287565],
    [0.0000000141, 4.97054926442, 1091.6252591036],
    [0.00000001706, 3.77129732727, 1279.794572628],
    [0.0000000152, 5.37754317175, 977.4867846211],
    [0.00000001408, 1.45754211476, 1269.4996318895],
    [0.00000001343, 1.92467316978, 1354.4331588434],
    [0.00000001518, 1.61233888307, 1439.5096981492],
    [0.00000001268, 5.5967666796, 1474.9344208013],
    [0.00000001308, 5.87704730505, 558.1451530978],
    [0.00000001365, 3.14974903366, 1446.62324515],
    [0.00000001435, 4.97958755613, 991.7138786227],
    [0.00000001235, 0.66052761201, 1475.6851803267],
    [0.00000001286, 1.8445004738, 380.12776796],
    [0.00000001339, 0.92704363552, 2847.5268269094],
    [0.00000001243, 4.20798051217, 217.2312487011],
    [0.00000001144, 5.291367463, 1482.0479678021],
    [0.00000001323, 5.16544573102, 284.1485407422],
    [0.0000000156, 2.59829890086, 100.6450936638],
    [0.00000001145, 4.47807440609, 408.4389436113],
    [0.00000001132, 3.62425240134, 1063.5747158832],
    [0.0000000122, 2.47481989397, 373.0142209592],
    [0.00000001079, 0.26102705757, 1482.7987273275],
    [0.00000001252, 5.77248253921, 473.068613792],
    [0.00000001242, 1.39155353408, 520.129737539],
    [0.00000001242, 2.94913211429, 539.2521926502],
    [0.00000001273, 4.66529140108, 842.9014410135],
    [0.00000001421, 5.33916221251, 2840.4132799086],
    [0.00000001222, 3.29271947698, 1994.3304451574],
    [0.0000000103, 3.78515935351, 850.0149880143],
    [0.00000000984, 0.3709023902, 536.8526962052],
    [0.00000000984, 3.96978325817, 522.529233984],
    [0.00000001165, 1.66359385295, 2758.6611466924],
    [0.00000001015, 5.23059949116, 450.9772132642],
    [0.00000001029, 1.56763208573, 313.2104759189],
    [0.00000001121, 2.24402409676, 4164.311989613],
    [0.00000000994, 1.30901040464, 1969.2006632438],
    [0.00000000944, 0.95774392273, 3163.918696566],
    [0.00000001047, 1.76345593121, 586.3133163972],
    [0.00000000901, 1.3832963816, 248.7238180901],
    [0.000000009, 0.83061588531, 3480.3105662226],
    [0.00000000881, 5.31113210528, 3384.3313390048],
    [0.00000001056, 0.81526253414, 2545.3620512544],
    [0.00000001178, 2.14372062567, 2428.0421830342],
    [0.00000001007, 3.63586452957, 1432.3961511484],
    [0.00000001017, 3.67393791007, 8094.5216858326],
    [0.00000000984, 0.88440907863, 522.6256022036],
    [0.00000000984, 3.45627656974, 536.7563279856],
    [0.00000000865, 0.50216013525, 2950.619601128],
    [0.00000000873, 4.74768173992, 2413.8150890326],
    [0.00000000822, 2.21364343296, 4539.6924964118],
    [0.00000000891, 0.04963796225, 486.4019359163],
    [0.00000000832, 2.25167601382, 608.404716925],
    [0.00000001129, 5.87079751174, 2200.5159935946],
    [0.00000000866, 4.29611856959, 1141.1340634054],
    [0.00000000958, 1.27970555258, 155.7829722581],
    [0.00000000825, 1.82027592583, 8617.0991039264],
    [0.00000000785, 3.70194655878, 3803.81598288],
    [0.0000000078, 5.82856731272, 9153.9036160218],
    [0.00000000784, 5.32113346121, 1791.3262904579],
    [0.00000000821, 3.21388542837, 902.7051860538],
    [0.00000000781, 0.97332239037, 1578.7779545453],
    [0.00000000766, 0.71376571141, 3810.9295298808],
    [0.00000000949, 6.26912102192, 298.2326223919],
    [0.00000000801, 3.05567719876, 77204.32749453338],
    [0.00000000779, 0.55053192876, 521.6142102473],
    [0.00000000779, 3.79015371961, 537.7677199419],
    [0.00000000755, 2.10393125979, 8631.326197928],
    [0.00000000829, 3.04136554762, 2957.7331481288],
    [0.00000000743, 3.4983481841, 1059.903195051],
    [0.00000000743, 3.07971309061, 3274.1250177854],
    [0.00000000737, 5.69850994087, 277.0349937414],
    [0.0000000078, 5.38986403689, 605.9570363702],
    [0.00000000799, 1.14945420076, 572.9799942729],
    [0.00000000802, 2.35695692863, 984.6003316219],
    [0.00000000764, 0.39766128691, 1792.0770499833],
    [0.00000000715, 1.28765336247, 1688.9842757647],
    [0.00000000751, 1.02173203233, 1670.8250285],
    [0.0000000085, 2.33021670338, 775.233389447],
    [0.00000000739, 4.25047385192, 967.3348562345],
    [0.00000000702, 4.47851796652, 5223.6939198022],
    [0.00000000726, 4.13077301998, 3053.7123753466],
    [0.00000000848, 4.81954421072, 1289.9465010146],
    [0.00000000701, 2.88277383921, 245.5424243524],
    [0.00000000676, 2.40793716843, 2310.722314814],
    [0.00000000684, 5.02029969007, 1798.4398374587],
    [0.000000007, 2.95656616511, 487.1526954417],
    [0.000000007, 4.52571213685, 572.2292347475],
    [0.00000000667, 5.58820603533, 1012.9115072732],
    [0.00000000856, 5.49062175402, 3281.2385647862],
    [0.00000000688, 4.53443685661, 5062.2699145056],
    [0.0000000067, 2.20829954235, 398.1440028728],
    [0.000000007, 0.9082541837, 166.828672522],
    [0.00000000674, 3.88153164593, 4649.8988176312],
    [0.00000000679, 5.25022214235, 24498.8302462904],
    [0.00000000729, 4.80748161782, 4546.8060434126],
    [0.00000000651, 1.93840355543, 4856.0843660684],
    [0.00000000665, 1.6210395035, 306.0969289181],
    [0.00000000649, 6.27565603355, 1799.1905969841],
    [0.00000000704, 5.13302286395, 5165.3626887242],
    [0.00000000748, 0.9380518436, 2861.753920911],
    [0.00000000626, 0.63607861789, 3796.7024358792],
    [0.00000000629, 3.95200945726, 3487.4241132234],
    [0.00000000703, 4.75333752379, 2288.3440435114],
    [0.00000000703, 5.25394837027, 2274.1169495098],
    [0.00000000611, 5.22985008895, 5746.271337896],
    [0.0000000063, 4.03795930066, 4333.5069479746],
    [0.00000000606, 0.77317400848, 1751.539531416],
    [0.00000000748, 1.94530786303, 1262.3860848887],
    [0.00000000596, 2.67910420053, 3590.516887442],
    [0.00000000779, 0.03702524033, 535.8413042489],
    [0.00000000779, 4.30366040804, 523.5406259403],
    [0.00000000578, 0.90023029993, 3494.5376602242],
    [0.00000000607, 1.35240171145, 2132.99095438],
    [0.00000000757, 1.31807608705, 105.5404547734],
    [0.00000000744, 6.04792773935, 643.0786800517],
    [0.00000000569, 4.64485571012, 4017.115078318],
    [0.0000000072, 1.48967021247, 3075.053016349],
    [0.00000000586, 2.03862098556, 453.424893819],
    [0.00000000573, 5.97537798329, 394.3548619616],
    [0.00000000634, 6.09734075114, 469.8872200543],
    [0.00000000559, 0.92746805833, 444.7574381407],
    [0.00000000567, 5.33234912069, 1887.3055176757],
    [0.00000000564, 2.5197509588, 1127.0499817557],
    [0.00000000547, 0.43067657913, 4127.3213995374],
    [0.00000000624, 2.95326482349, 25035.6347583858],
    [0.00000000767, 0.652076447, 927.8349679674],
    [0.00000000701, 2.35692203971, 1819.6374661092],
    [0.0000000065, 4.97825491434, 4230.414173756],
    [0.00000000545, 6.0968646122, 810.6581120991],
    [0.00000000616, 3.45386363434, 25021.4076643842],
    [0.00000000725, 5.43063357738, 74.7815985673],
    [0.00000000537, 1.85184528328, 782.3469364478],
    [0.00000000541, 5.13234346501, 3700.7232086614],
    [0.00000000543, 0.02138348498, 4738.7644978482],
    [0.00000000526, 4.37099486824, 3171.0322435668],
    [0.00000000524, 2.47451797434, 2744.4340526908],
    [0.0000000063, 3.30718088155, 5069.3834615064],
    [0.00000000543, 3.12700660107, 216.4804891757],
    [0.00000000534, 6.16997492577, 436.8931316145],
    [0.00000000523, 2.13983751104, 3060.8259223474],
    [0.00000000541, 0.28060434582, 1268.7488723641],
    [0.00000000666, 6.02394430259, 4525.4654024102],
    [0.00000000593, 5.06338221497, 4642.7852706304],
    [0.00000000493, 3.86164538549, 10021.8372800994],
    [0.0000000066, 5.1150128199, 3156.8051495652],
    [0.00000000628, 0.19896395151, 1560.6187072806],
    [0.00000000528, 2.69043641375, 3252.784376783],
    [0.00000000546, 1.38493599415, 589.4947101349],
    [0.00000000509, 0.35840961831, 4686.8894077068],
    [0.00000000505, 0.21000748847, 754.0357607965],
    [0.00000000475, 5.72911758023, 1467.8208738005],
    [0.00000000451, 4.98362627844, 2107.7181601145],
    [0.00000000515, 5.03293826716, 3466.083472221],
    [0.00000000466, 0.09931185396, 1489.9122743283],
    [0.00000000462, 5.48131535175, 26617.5941066688],
    [0.00000000497, 5.58599824476, 69.1525242748],
    [0.000000006, 5.56979305057, 2516.9078632512],
    [0.00000000442, 3.42626208754, 4436.5997221932],
    [0.00000000557, 5.9741893993, 2964.8466951296],
    [0.00000000433, 0.7283538424, 4701.1165017084],
    [0.00000000452, 3.24655844352, 1550.939859646],
    [0.00000000429, 4.70606670928, 4002.8879843164],
    [0.00000000466, 5.89934183506, 3267.0114707846],
    [0.00000000476, 4.83733392895, 447.7958195265],
    [0.00000000417, 1.38377742741, 665.0270682276],
    [0.00000000573, 1.05151671334, 1357.6145525811],
    [0.00000000417, 0.72571440164, 3782.4753418776],
    [0.00000000423, 6.09770834441, 415.2918581812],
    [0.00000000412, 2.59026540572, 3906.9087570986],
    [0.00000000431, 0.15413742649, 2108.4689196399],
    [0.00000000407, 0.4998520589, 4113.0943055358],
    [0.00000000424, 0.17482952689, 1254.5217783625],
    [0.00000000399, 5.21078052617, 1457.525933062],
    [0.00000000396, 3.76182057447, 4966.2906872878],
    [0.00000000483, 4.97716778578, 827.9235874865],
    [0.00000000487, 4.98989666228, 1901.5326116773],
    [0.00000000398, 2.98973507663, 355.7487455718],
    [0.00000000396, 2.29671916725, 1020.025054274],
    [0.00000000438, 5.82247234506, 611.5861106627],
    [0.00000000412, 0.90735881784, 1902.2833712027],
    [0.00000000409, 4.03770283879, 12036.4607348882],
    [0.00000000404, 1.67660119073, 2042.4977891028],
    [0.00000000412, 4.61042804541, 4863.1979130692],
    [0.00000000379, 0.15741978894, 4443.713269194],
    [0.00000000376, 0.48003200118, 614.6244920485],
    [0.00000000514, 3.78168900426, 4752.9915918498],
    [0.00000000369, 3.52888759515, 4120.2078525366],
];

const Y2: &[Term] = &[
    [0.00124032509, 2.56495576833, 522.5774180938],
    [0.00121455991, 4.9239876638, 536.8045120954],
    [0.00076523263, 3.75913371793, 529.6909650946],
    [0.00076943042, PI, 0.0],
    [0.000413576, 3.55228440457, 1059.3819301892],
    [0.00011277667, 0.18559902389, 7.1135470008],
    [0.00007051103, 5.4540436857, 1066.49547719],
    [0.0000571944, 2.0597000023, 1052.2683831884],
    [0.00005286157, 2.69490465064, 515.463871093],
    [0.00004039038, 4.01341034637, 1589.0728952838],
    [0.00003704528, 4.79029292271, 543.9180590962],
    [0.00001280283, 1.47574006861, 110.2063212194],
    [0.00001059783, 0.89610748176, 426.598190876],
    [0.00001320627, 0.05786048417, 14.2270940016],
    [0.00000888144, 3.09675195621, 526.5095713569],
    [0.00000864544, 4.38537588795, 532.8723588323],
    [0.00000820223, 0.37911850134, 632.7837393132],
    [0.00000993728, 6.18613980226, 323.5054166574],
    [0.00000573001, 0.1074449197, 949.1756089698],
    [0.0000057148, 1.57855126864, 1045.1548361876],
    [0.00000624115, 1.29414272655, 735.8765135318],
    [0.00000513863, 4.40000698225, 525.7588118315],
    [0.00000511927, 3.08494935962, 533.6231183577],
    [0.00000458314, 5.95712671606, 1596.1864422846],
    [0.00000417651, 1.04909922555, 117.3198682202],
    [0.00000357612, 2.57817679198, 419.4846438752],
    [0.00000372789, 0.82429067684, 95.9792272178],
    [0.00000332599, 4.43064686875, 2118.7638603784],
    [0.00000263411, 1.67577905079, 625.6701923124],
    [0.00000261838, 1.57658925499, 206.1855484372],
    [0.0000028328, 2.13607070848, 1581.959348283],
    [0.00000261886, 2.11384561317, 956.2891559706],
    [0.00000224038, 5.60156218944, 433.7117378768],
    [0.00000215118, 0.20709824197, 942.062061969],
    [0.00000200755, 5.22220831536, 220.4126424388],
    [0.00000195809, 4.43848073387, 1169.5882514086],
    [0.0000016941, 3.75773944755, 316.3918696566],
    [0.00000189827, 4.45615781736, 639.897286314],
    [0.00000164118, 5.23637716488, 1073.6090241908],
    [0.00000169721, 1.95956186861, 1155.361157407],
    [0.00000139915, 2.84757472476, 508.3503240922],
    [0.00000135907, 3.57562359102, 742.9900605326],
    [0.00000133577, 1.8143294876, 199.0720014364],
    [0.00000170272, 6.03731209243, 330.6189636582],
    [0.00000136502, 2.96677322881, 309.2783226558],
    [0.00000106637, 1.10269205617, 853.196381752],
    [0.00000134907, 1.3100267739, 728.762966531],
    [0.00000112559, 3.07810031314, 1162.4747044078],
    [0.00000097174, 4.83540670069, 103.0927742186],
    [0.00000077442, 2.62321674807, 1265.5674786264],
    [0.00000074683, 4.62128405037, 551.031606097],
    [0.00000084709, 3.26954755507, 519.3960243561],
    [0.00000077754, 2.07024143046, 838.9692877504],
    [0.00000067576, 4.19610515178, 539.9859058331],
    [0.00000051093, 5.91426034557, 3.1813937377],
    [0.00000046635, 5.07066214967, 227.5261894396],
    [0.00000053076, 1.91517592863, 412.3710968744],
    [0.00000055428, 6.21192121199, 21.3406410024],
    [0.00000048874, 4.88897900689, 1062.5633239269],
    [0.00000043068, 2.73485657482, 1258.4539316256],
    [0.00000053411, 4.08909479852, 213.299095438],
    [0.0000003805, 4.25325459457, 440.8252848776],
    [0.00000041421, 2.87269446113, 618.5566453116],
    [0.00000037469, 3.08522051912, 1692.1656695024],
    [0.00000031825, 0.15097091165, 2125.8774073792],
    [0.00000036591, 2.83592966607, 1056.2005364515],
    [0.00000043277, 1.75702652017, 1574.8458012822],
    [0.00000032932, 4.95534262832, 1272.6810256272],
    [0.00000028786, 5.04321322439, 1055.4497769261],
    [0.00000036214, 2.88878659937, 302.164775655],
    [0.00000028755, 1.5456777556, 1038.0412891868],
    [0.00000031557, 2.02145667899, 831.8557407496],
    [0.00000029358, 3.23095760026, 1485.9801210652],
    [0.00000025839, 4.81555513749, 2648.454825473],
    [0.00000021631, 0.89648612124, 1471.7530270636],
    [0.00000026179, 0.24148768969, 846.0828347512],
    [0.00000021128, 4.96775257256, 1699.2792165032],
    [0.00000019785, 3.31607841546, 1063.3140834523],
    [0.00000022677, 3.77541947622, 1368.660252845],
    [0.00000020494, 4.53063691019, 647.0108333148],
    [0.00000016107, 0.54459154986, 1478.8665740644],
    [0.0000001389, 0.38659798495, 1375.7737998458],
    [0.0000001429, 0.85041670689, 124.433415221],
    [0.00000012066, 5.73472992745, 10.2949407385],
    [0.00000014561, 2.27759601573, 2111.6503133776],
    [0.00000011227, 1.59683338999, 511.5317178299],
    [0.00000012664, 5.78004639505, 963.4027029714],
    [0.00000010726, 5.88544476377, 547.8502123593],
    [0.00000013226, 4.53317344901, 750.1036075334],
    [0.00000012226, 2.25243853635, 1685.0521225016],
    [0.00000008892, 1.76003652107, 1382.8873468466],
    [0.00000009905, 0.77307644712, 934.9485149682],
    [0.00000007503, 5.67187992612, 1603.2999892854],
    [0.00000007748, 1.95614847548, 191.9584544356],
    [0.00000007293, 3.90640976229, 88.865680217],
    [0.00000008004, 5.88582537682, 337.732510659],
    [0.00000007467, 1.64289001379, 721.6494195302],
    [0.00000006361, 3.48520810942, 2221.856634597],
    [0.00000006799, 2.80209624655, 1795.258443721],
    [0.00000007045, 4.10613187589, 1361.5467058442],
    [0.00000006372, 0.3522631015, 860.3099287528],
    [0.00000004967, 1.37584831567, 99.9113804809],
    [0.00000006315, 1.53291580984, 1148.2476104062],
    [0.00000005574, 2.44509799385, 1049.0869894507],
    [0.00000004189, 4.77885922079, 1802.3719907218],
    [0.00000004812, 1.98451914225, 106.2741679563],
    [0.00000004025, 2.53347820962, 1251.3403846248],
    [0.00000003836, 1.94088141385, 1788.1448967202],
    [0.00000003926, 2.16218663827, 497.4476361802],
    [0.0000000362, 5.32009120194, 561.934294009],
    [0.00000003936, 3.52686641861, 405.2575498736],
    [0.00000003522, 3.09584664057, 501.2367770914],
    [0.00000003362, 4.90014804067, 234.6397364404],
    [0.00000003253, 3.3410607607, 611.4430983108],
    [0.00000003748, 0.47584176486, 113.3877149571],
    [0.00000003174, 3.90623325381, 447.9388318784],
    [0.00000002991, 1.586785168, 2104.5367663768],
    [0.00000002969, 4.12345180044, 2015.6710861598],
    [0.00000002744, 4.1785980027, 81.7521332162],
    [0.00000002754, 5.70118781143, 429.7795846137],
    [0.00000002799, 2.6581064647, 99.1606209555],
    [0.00000002757, 2.41130408823, 2008.557539159],
    [0.00000003501, 4.6182832631, 1069.6768709277],
    [0.0000000275, 0.88132502339, 1464.6394800628],
    [0.00000002955, 5.33795885153, 1592.2542890215],
    [0.00000002408, 3.82561184837, 149.5631971346],
    [0.00000002434, 4.87638052191, 1080.7225711916],
    [0.0000000238, 4.20833251941, 423.4167971383],
    [0.00000003126, 1.6854160346, 1567.7322542814],
    [0.00000002355, 2.28604318633, 824.7421937488],
    [0.00000002693, 2.9641044252, 295.0512286542],
    [0.00000002197, 1.74911888013, 629.6023455755],
    [0.00000002235, 3.71696358345, 6275.9623029906],
    [0.00000002231, 6.07590911987, 6290.1893969922],
    [0.0000000206, 0.61396408295, 2655.5683724738],
    [0.00000002732, 3.12540902543, 1898.3512179396],
    [0.00000002076, 5.13986644709, 10206.1719992102],
    [0.00000001974, 2.06571038137, 1891.2376709388],
    [0.00000002072, 1.21562719258, 10220.3990932118],
    [0.000000027, 0.24738899316, 107.0249274817],
    [0.00000001764, 4.69152887895, 970.5162499722],
    [0.00000001958, 2.42000633557, 2428.0421830342],
    [0.00000001815, 4.28784094353, 558.1451530978],
    [0.00000001819, 3.79128389109, 1165.6560981455],
    [0.00000001797, 5.48847999907, 1585.1407420207],
    [0.00000001719, 3.18125652838, 654.1243803156],
    [0.00000001768, 2.63222494622, 1159.2933106701],
    [0.00000001746, 2.85411229216, 1585.8915015461],
    [0.00000001735, 0.22737646203, 1905.4647649404],
    [0.00000001559, 3.23096370603, 635.9651330509],
    [0.00000001781, 5.31682308345, 3178.1457905676],
    [0.00000001753, 4.84286553509, 757.2171545342],
    [0.00000001334, 2.44302159466, 2324.9494088156],
    [0.00000001395, 2.53366287996, 1279.794572628],
    [0.00000001384, 4.87298665741, 5230.807466803],
    [0.0000000138, 2.51452122242, 5216.5803728014],
    [0.00000001551, 0.71019873146, 945.9942152321],
    [0.00000001198, 5.50483020501, 326.6868103951],
    [0.0000000122, 5.64184418834, 319.5732633943],
    [0.00000001271, 0.01278840381, 9161.0171630226],
    [0.00000001268, 3.9375217705, 9146.790069021],
    [0.00000001183, 1.688098782, 636.7158925763],
    [0.00000001273, 5.69517929111, 2228.9701815978],
    [0.0000000131, 2.10065572721, 2001.4439921582],
    [0.00000001162, 2.39505525199, 2214.7430875962],
    [0.00000001234, 2.08977841036, 2744.4340526908],
    [0.00000001247, 2.21578255427, 3274.1250177854],
    [0.00000001057, 4.2578629309, 1677.9385755008],
    [0.00000001051, 0.87130311109, 1493.093668066],
    [0.00000001063, 0.33463469782, 518.6452648307],
    [0.00000001063, 4.00605095055, 540.7366653585],
    [0.00000001137, 0.75125250543, 1781.0313497194],
    [0.00000000985, 2.22432634276, 2641.3412784722],
    [0.00000000963, 3.27927902413, 2538.2485042536],
    [0.00000001262, 3.63544646876, 5223.6939198022],
    [0.00000000939, 3.69451127868, 909.8187330546],
    [0.00000000932, 1.81698627301, 952.3570027075],
    [0.00000000905, 1.75035968766, 2207.6295405954],
    [0.00000000904, 3.8877615136, 1158.5425511447],
    [0.00000001102, 4.15046964897, 3281.2385647862],
    [0.00000001183, 0.56667627747, 953.1077622329],
    [0.00000000914, 1.06396015448, 210.1177017003],
    [0.00000000909, 3.97386545234, 5753.3848848968],
    [0.00000001099, 1.58755431405, 1912.5783119412],
    [0.00000000873, 4.08070650023, 1670.8250285],
    [0.000000008, 4.12792698994, 2751.5475996916],
    [0.00000000812, 6.05958975123, 422.6660376129],
    [0.00000000796, 1.96326433522, 739.8086667949],
    [0.0000000079, 2.45933758823, 1166.4068576709],
    [0.00000001034, 3.34912946109, 3487.4241132234],
    [0.00000000785, 2.02597124501, 416.3032501375],
    [0.00000000919, 2.39038740005, 203.0041546995],
    [0.00000000761, 1.08620709767, 2420.9286360334],
    [0.00000000837, 5.40426948233, 9683.5945811164],
    [0.00000000721, 3.8776851867, 4694.0029547076],
    [0.00000000978, 4.33162349182, 2964.8466951296],
    [0.0000000092, 1.74204964119, 3899.7952100978],
    [0.00000000978, 4.89659129136, 6283.0758499914],
    [0.00000000778, 3.69507849012, 1354.4331588434],
    [0.00000000915, 2.13949682628, 3576.2897934404],
    [0.00000000722, 0.691877733, 1809.4855377226],
    [0.00000000696, 3.87883551414, 1987.2168981566],
    [0.00000000668, 2.86620871992, 2854.6403739102],
    [0.00000000655, 5.29949318111, 8624.2126509272],
    [0.00000000859, 4.45240229941, 458.8415197904],
    [0.00000000826, 3.58615132269, 3149.6916025644],
    [0.00000000781, 2.4085074946, 927.8349679674],
    [0.00000000818, 2.76219868399, 3384.3313390048],
    [0.00000000794, 4.72021603023, 2332.0629558164],
    [0.00000000751, 3.92545123427, 3597.6304344428],
    [0.00000000791, 1.52573491012, 3796.7024358792],
    [0.00000000736, 1.86637976498, 3480.3105662226],
    [0.00000000638, 0.55679578954, 2545.3620512544],
    [0.00000000648, 1.93188405517, 3060.8259223474],
    [0.00000000785, 2.74220165125, 732.6951197941],
    [0.00000000595, 3.50907525965, 76.2660712756],
    [0.00000000725, 1.26016666923, 3789.5888888784],
    [0.00000000712, 1.99484788774, 3590.516887442],
    [0.00000000595, 4.19675234613, 2435.155730035],
    [0.00000000571, 3.45872224398, 209.3669421749],
    [0.00000000724, 1.55082948672, 1884.124123938],
    [0.00000000664, 2.83741922299, 3046.5988283458],
    [0.00000000565, 0.13040432946, 2861.753920911],
    [0.00000000719, 3.02987373443, 600.5404103988],
    [0.00000000546, 0.87761028668, 437.6438911399],
    [0.00000000549, 0.7393522874, 2634.2277314714],
    [0.00000000558, 5.78011457626, 1141.1340634054],
    [0.00000000681, 5.03391374752, 9153.9036160218],
    [0.00000000588, 3.45206402508, 430.5303441391],
    [0.00000000535, 3.65950530901, 2303.6087678132],
    [0.00000000542, 1.07428391249, 2833.2997329078],
    [0.00000000662, 2.49995354012, 3700.7232086614],
    [0.00000000578, 1.21476916834, 2524.021410252],
    [0.00000000619, 3.11707822296, 3803.81598288],
    [0.00000000644, 1.29355284344, 3370.1042450032],
    [0.00000000514, 1.29667013246, 3693.6096616606],
    [0.00000000479, 0.80014976333, 1457.525933062],
    [0.00000000576, 1.73977731568, 2317.8358618148],
    [0.00000000578, 1.89898756605, 3892.681663097],
    [0.00000000566, 6.1640670232, 2627.1141844706],
    [0.00000000433, 0.32147874689, 621.7380390493],
    [0.0000000053, 1.01908606392, 547.0994528339],
    [0.0000000053, 3.32159958445, 512.2824773553],
    [0.00000000429, 1.73580957288, 2957.7331481288],
    [0.00000000478, 3.50052966452, 1593.0050485469],
    [0.00000000508, 2.12854820616, 1244.226837624],
    [0.00000000475, 5.81122801833, 3267.0114707846],
    [0.00000000484, 0.5292063438, 2097.423219376],
    [0.00000000521, 1.46015655382, 4216.1870797544],
    [0.00000000458, 4.03020978215, 628.8515860501],
    [0.00000000424, 2.34294525821, 415.5524906121],
    [0.00000000527, 4.64068120535, 462.0229135281],
    [0.00000000527, 2.84159709661, 597.3590166611],
    [0.0000000045, 3.73641389697, 3914.0223040994],
    [0.00000000511, 4.46661629527, 643.0786800517],
    [0.00000000431, 0.85126632752, 849.2642284889],
    [0.00000000402, 5.96207457174, 2730.2069586892],
    [0.00000000402, 2.01243830321, 2531.1349572528],
    [0.00000000412, 6.19801347868, 2758.6611466924],
];

const Y3: &[Term] = &[
    [0.00017085516, 4.29096904063, 522.5774180938],
    [0.00016701353, 3.20365737109, 536.8045120954],
    [0.00004006038, 0.0, 0.0],
    [0.00001782451, 1.99283071153, 1059.3819301892],
    [0.00001443816, 4.40866555269, 515.463871093],
    [0.00001079405, 3.85450799252, 1066.49547719],
    [0.00001013157, 3.07729621279, 543.9180590962],
    [0.00001055565, 4.70184773789, 7.1135470008],
    [0.00000710385, 3.93734062697, 1052.2683831884],
    [0.00000259601, 2.7156647839, 1589.0728952838],
    [0.00000300599, 4.62156117661, 14.2270940016],
    [0.00000134826, 3.36277253898, 1045.1548361876],
    [0.00000142837, 5.2881430733, 529.6909650946],
    [0.00000078211, 4.4427715197, 1596.1864422846],
    [0.00000076457, 5.61587391706, 117.3198682202],
    [0.00000091646, 4.44623348041, 323.5054166574],
    [0.00000058233, 4.56584817087, 508.3503240922],
    [0.00000061115, 0.26556050313, 110.2063212194],
    [0.00000050933, 2.5562704456, 95.9792272178],
    [0.00000049265, 5.48275480881, 426.598190876],
    [0.0000004702, 3.57871568016, 1073.6090241908],
    [0.00000056831, 3.04840022697, 735.8765135318],
    [0.00000043313, 2.24184158741, 632.7837393132],
    [0.00000038462, 3.29258581824, 625.6701923124],
    [0.00000040222, 1.9137500949, 942.062061969],
    [0.00000032318, 4.02515512259, 1581.959348283],
    [0.00000032971, 3.90954485376, 433.7117378768],
    [0.00000032288, 2.89151197781, 551.031606097],
    [0.00000038564, 4.33793526039, 330.6189636582],
    [0.00000038001, 0.52874503771, 103.0927742186],
    [0.00000028185, 3.1946448421, 2118.7638603784],
    [0.0000002741, 3.5005320322, 220.4126424388],
    [0.00000029979, 2.02000649959, 949.1756089698],
    [0.00000026996, 4.44472041714, 419.4846438752],
    [0.00000026377, 2.75072415591, 1169.5882514086],
    [0.00000030311, 3.07123940662, 728.762966531],
    [0.00000024557, 3.53973687449, 199.0720014364],
    [0.00000023237, 3.72589643043, 1155.361157407],
    [0.0000002262, 0.51667171294, 956.2891559706],
    [0.00000024897, 5.10106981596, 519.3960243561],
    [0.00000020475, 2.34104128108, 539.9859058331],
    [0.00000015785, 4.86812169747, 309.2783226558],
    [0.00000017529, 4.59245273476, 21.3406410024],
    [0.00000014338, 5.77036664467, 853.196381752],
    [0.0000001836, 2.70610883679, 639.897286314],
    [0.00000013298, 3.36606460721, 227.5261894396],
    [0.00000011494, 2.47965479847, 440.8252848776],
    [0.00000011613, 4.6952697255, 618.5566453116],
    [0.00000011127, 3.1032765725, 206.1855484372],
    [0.0000001071, 3.98026635344, 838.9692877504],
    [0.00000010142, 3.88713064979, 412.3710968744],
    [0.00000009336, 3.27628408529, 1038.0412891868],
    [0.00000009452, 3.48158185106, 1574.8458012822],
    [0.00000007683, 4.47752898425, 1258.4539316256],
    [0.00000007886, 3.90593732757, 831.8557407496],
    [0.00000007729, 5.68110789292, 316.3918696566],
    [0.0000000818, 4.57699323815, 302.164775655],
    [0.00000008029, 2.34403579886, 213.299095438],
    [0.00000007696, 1.59660298447, 742.9900605326],
    [0.00000005946, 4.96977386305, 2125.8774073792],
    [0.00000003935, 4.46770507766, 1265.5674786264],
    [0.00000004139, 5.47876936143, 124.433415221],
    [0.00000003609, 1.88146800355, 1485.9801210652],
    [0.0000000302, 3.38305964289, 1699.2792165032],
    [0.00000002703, 5.9586572445, 88.865680217],
    [0.00000002627, 3.98517206294, 1062.5633239269],
    [0.0000000246, 3.67829773885, 2648.454825473],
    [0.00000002884, 2.40956971928, 934.9485149682],
    [0.00000002322, 4.05450701004, 1603.2999892854],
    [0.0000000299, 2.57338221095, 647.0108333148],
    [0.00000002359, 4.17350268052, 337.732510659],
    [0.00000002931, 2.89770912048, 1471.7530270636],
    [0.00000002268, 3.33219652413, 721.6494195302],
    [0.00000002859, 3.66153535064, 1272.6810256272],
    [0.00000002014, 3.64931827217, 191.9584544356],
    [0.0000000234, 5.54448900881, 1368.660252845],
    [0.00000002177, 4.07775459963, 963.4027029714],
    [0.00000001747, 4.72683114179, 1685.0521225016],
    [0.0000000164, 2.35287050678, 750.1036075334],
    [0.00000001734, 4.14601873919, 1055.4497769261],
    [0.00000001717, 2.19035940032, 447.9388318784],
    [0.00000001611, 3.7116944339, 1788.1448967202],
    [0.00000001784, 4.90110666417, 526.5095713569],
    [0.00000001784, 5.72276429138, 532.8723588323],
    [0.00000001811, 4.93808835269, 860.3099287528],
    [0.00000001431, 6.00191758769, 81.7521332162],
    [0.00000001354, 2.56987682828, 1162.4747044078],
    [0.00000001306, 0.17505316696, 1382.8873468466],
    [0.00000001341, 4.03349830399, 1251.3403846248],
    [0.00000001261, 3.24050324812, 2104.5367663768],
    [0.000000017, 2.59885721626, 1056.2005364515],
    [0.00000001425, 5.76921390026, 1361.5467058442],
    [0.00000001117, 3.59296025283, 1148.2476104062],
    [0.00000001252, 4.1204948766, 2111.6503133776],
    [0.00000001061, 2.42113180503, 1478.8665740644],
    [0.00000000987, 5.56458244351, 405.2575498736],
    [0.00000001211, 2.84309753774, 1069.6768709277],
    [0.00000001118, 5.88365850057, 611.4430983108],
    [0.00000001093, 0.22239904129, 1141.1340634054],
    [0.0000000101, 5.13077933778, 2097.423219376],
    [0.00000001116, 0.0066928326, 1884.124123938],
    [0.0000000109, 2.69229040194, 1464.6394800628],
    [0.00000001013, 5.44748312429, 1049.0869894507],
    [0.00000000864, 3.81824814417, 1567.7322542814],
    [0.00000000835, 2.74175210945, 2008.557539159],
    [0.00000001043, 2.98280277812, 1080.7225711916],
    [0.00000000823, 2.03927945733, 654.1243803156],
    [0.00000000892, 4.64080401213, 295.0512286542],
    [0.00000000793, 2.96630495399, 234.6397364404],
    [0.00000000936, 4.23459087535, 2207.6295405954],
    [0.00000000957, 4.9672158311, 1994.3304451574],
    [0.00000000875, 1.72555259756, 846.0828347512],
    [0.00000000961, 4.8057409127, 2317.8358618148],
    [0.00000000831, 4.85908496939, 2001.4439921582],
    [0.00000000671, 3.0910299295, 2420.9286360334],
    [0.0000000067, 1.58976718357, 2435.155730035],
    [0.00000000825, 4.70761031951, 1898.3512179396],
    [0.00000000742, 5.32801449376, 533.6231183577],
    [0.00000000742, 5.29585646179, 525.7588118315],
    [0.00000000779, 4.43484800953, 2214.7430875962],
    [0.00000000735, 4.60695678136, 2627.1141844706],
    [0.00000000693, 0.82599527101, 1692.1656695024],
    [0.00000000678, 4.77937359684, 824.7421937488],
    [0.00000000571, 1.40932670441, 2751.5475996916],
    [0.00000000635, 3.61905584922, 2840.4132799086],
    [0.00000000513, 3.6901870899, 1891.2376709388],
    [0.0000000056, 3.36476362299, 1905.4647649404],
    [0.00000000572, 2.39114449243, 1781.0313497194],
    [0.00000000617, 4.55555334584, 2634.2277314714],
    [0.00000000623, 4.77211208531, 2310.722314814],
    [0.00000000466, 6.12814355088, 1375.7737998458],
    [0.0000000056, 3.98598190961, 2524.021410252],
    [0.00000000577, 3.52472118762, 2015.6710861598],
    [0.00000000523, 2.55250481076, 1802.3719907218],
    [0.00000000415, 4.68478558747, 501.2367770914],
    [0.00000000415, 5.93908536808, 558.1451530978],
];

const Y4: &[Term] = &[
    [0.00001762645, 6.04159386554, 522.5774180938],
    [0.00001716045, 1.4620628571, 536.8045120954],
    [0.00000305036, 6.14052786819, 515.463871093],
    [0.00000216203, 1.34301856666, 543.9180590962],
    [0.00000127895, 2.25941664796, 1066.49547719],
    [0.0000008174, 2.84766415879, 7.1135470008],
    [0.00000055008, 0.23109269174, 1059.3819301892],
    [0.00000068446, 5.77736913573, 1052.2683831884],
    [0.00000070306, 0.0, 0.0],
    [0.00000050861, 2.90538809625, 14.2270940016],
    [0.00000023665, 5.19261861053, 1045.1548361876],
    [0.00000014962, 0.08526156115, 508.3503240922],
    [0.00000013643, 1.34331851905, 1589.0728952838],
    [0.00000010393, 1.88986884896, 1073.6090241908],
    [0.00000010849, 2.60493722297, 529.6909650946],
    [0.0000001046, 2.92640289661, 1596.1864422846],
    [0.00000010367, 3.84513840002, 117.3198682202],
    [0.00000007291, 1.00614499991, 551.031606097],
    [0.00000005794, 4.27528856669, 95.9792272178],
    [0.00000004975, 5.73943100781, 110.2063212194],
    [0.00000005282, 2.62080083504, 330.6189636582],
    [0.00000005258, 3.58591321573, 942.062061969],
    [0.00000005226, 2.63091128343, 323.5054166574],
    [0.00000004305, 4.90946848289, 728.762966531],
    [0.00000003429, 4.98831951816, 625.6701923124],
    [0.00000003596, 4.85294025637, 735.8765135318],
    [0.00000003436, 5.27047268184, 199.0720014364],
    [0.0000000286, 5.84683747296, 1581.959348283],
    [0.00000002704, 0.82647334354, 440.8252848776],
    [0.00000002588, 1.00323145819, 1169.5882514086],
    [0.00000002746, 2.32353716517, 103.0927742186],
    [0.0000000224, 5.51871835829, 1155.361157407],
    [0.00000003118, 1.78972895031, 433.7117378768],
    [0.00000002125, 6.27704580705, 419.4846438752],
    [0.000000016, 1.7685762004, 2118.7638603784],
    [0.00000001539, 3.88246943655, 426.598190876],
    [0.00000001468, 1.67334691084, 220.4126424388],
    [0.00000001415, 1.66047415115, 227.5261894396],
    [0.00000001804, 4.0973236992, 632.7837393132],
    [0.00000001482, 0.02887555321, 302.164775655],
    [0.000000014, 5.34809832156, 1574.8458012822],
    [0.0000000154, 0.75983380154, 618.5566453116],
    [0.00000001256, 0.33648936932, 309.2783226558],
    [0.00000001362, 5.14594131828, 956.2891559706],
    [0.00000001187, 4.1678392002, 853.196381752],
    [0.00000001507, 0.98837376639, 639.897286314],
    [0.00000001103, 5.60146041595, 412.3710968744],
    [0.00000001094, 0.12734228732, 1258.4539316256],
    [0.00000001142, 3.99469727044, 949.1756089698],
    [0.00000000852, 0.81910749925, 831.8557407496],
    [0.00000000868, 5.39175241124, 1038.0412891868],
    [0.00000000817, 2.44564373063, 742.9900605326],
    [0.00000000677, 5.88945439666, 838.9692877504],
    [0.0000000089, 1.13100927652, 647.0108333148],
    [0.00000000598, 2.4615243576, 337.732510659],
    [0.00000000556, 0.72453025284, 1485.9801210652],
    [0.00000000451, 5.32835796642, 1471.7530270636],
    [0.00000000498, 1.06608244072, 1361.5467058442],
    [0.00000000468, 5.0720965065, 21.3406410024],
    [0.00000000396, 2.33304510363, 1603.2999892854],
];

const Y5: &[Term] = &[
    [0.00000131471, 1.64205554066, 522.5774180938],
    [0.00000126634, 5.87372673584, 536.8045120954],
    [0.00000048269, 1.62788936723, 515.463871093],
    [0.00000034034, 5.84040207007, 543.9180590962],
    [0.00000011212, 0.62260985921, 1066.49547719],
    [0.0000000406, 1.77167912883, 1052.2683831884],
    [0.00000001943, 0.18158253075, 1073.6090241908],
    [0.00000001786, 1.5002152999, 1045.1548361876],
    [0.00000000886, 1.68419633034, 508.3503240922],
    [0.00000000886, 2.65648931803, 551.031606097],
    [0.00000000467, 1.37841715169, 1596.1864422846],
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
    [0.00407072175, 1.52699353482, 529.6909650946],
    [0.00020307341, 2.59878269248, 1059.3819301892],
    [0.00014424953, 4.85400155025, 536.8045120954],
    [0.00015474611, 0.0, 0.0],
    [0.00012730364, 5.45536715732, 522.5774180938],
    [0.00002100882, 0.09538864287, 7.1135470008],
    [0.00001230425, 3.14222500244, 1589.0728952838],
    [0.00000760633, 5.27867348162, 1066.49547719],
    [0.00000678832, 4.74895422783, 1052.2683831884],
    [0.00000597018, 1.04748050782, 110.2063212194],
    [0.00000570024, 1.09418619361, 103.0927742186],
    [0.00000473035, 0.50552897171, 426.598190876],
    [0.00000435228, 0.65531261911, 419.4846438752],
    [0.00000351616, 5.47690288047, 515.463871093],
    [0.0000034587, 2.81172002142, 632.7837393132],
    [0.0000021135, 4.74646123972, 543.9180590962],
    [0.00000180278, 3.91041109061, 735.8765135318],
    [0.0000016477, 2.83487029931, 949.1756089698],
    [0.00000196365, 6.05289642814, 323.5054166574],
    [0.00000129775, 1.73448235766, 206.1855484372],
    [0.00000167599, 5.97044048706, 316.3918696566],
    [0.00000104351, 1.13016427121, 1162.4747044078],
    [0.00000082565, 4.83971471856, 213.299095438],
    [0.00000078753, 4.62142072971, 525.7588118315],
    [0.00000079813, 4.38404909104, 532.8723588323],
    [0.00000074155, 5.89524367925, 526.5095713569],
    [0.00000092829, 6.22169408238, 14.2270940016],
    [0.00000074957, 3.57596458602, 2118.7638603784],
    [0.00000063605, 5.76632311254, 533.6231183577],
    [0.00000051134, 1.68571094945, 956.2891559706],
    [0.00000044815, 5.69775266875, 1596.1864422846],
    [0.00000040568, 3.71961451563, 742.9900605326],
    [0.00000041188, 0.82223688309, 95.9792272178],
    [0.00000037171, 1.10942550189, 846.0828347512],
    [0.00000038908, 0.9308749453, 117.3198682202],
    [0.00000036944, 3.58385604224, 625.6701923124],
    [0.0000003588, 4.44075645073, 1045.1548361876],
    [0.0000002782, 5.56873618724, 433.7117378768],
    [0.00000034507, 4.07744250508, 639.897286314],
    [0.00000035616, 4.87718639945, 1581.959348283],
    [0.00000024523, 5.05217548984, 220.4126424388],
    [0.0000002287, 2.89593409105, 942.062061969],
    [0.00000022917, 4.39232470827, 1169.5882514086],
    [0.00000016843, 0.83125469323, 853.196381752],
    [0.00000012828, 5.65999760985, 1265.5674786264],
    [0.00000014203, 2.02042807659, 1692.1656695024],
    [0.00000013842, 4.96847316294, 1155.361157407],
    [0.00000011455, 1.71478767851, 309.2783226558],
    [0.00000013119, 5.8960562282, 330.6189636582],
    [0.0000000895, 5.12739425794, 1073.6090241908],
    [0.00000009033, 5.29194839345, 412.3710968744],
    [0.00000008433, 1.66929921774, 199.0720014364],
    [0.00000009695, 1.2820164302, 1478.8665740644],
    [0.00000007507, 5.63314626529, 1375.7737998458],
    [0.00000005683, 5.64842716451, 508.3503240922],
    [0.00000005065, 4.61872836521, 1272.6810256272],
    [0.00000005122, 0.7805502948, 838.9692877504],
    [0.00000004633, 3.96963286081, 2648.454825473],
    [0.00000004955, 6.2397852576, 3.1813937377],
    [0.00000004144, 0.27205253609, 1795.258443721],
    [0.0000000389, 4.99485656209, 1062.5633239269],
    [0.00000003777, 3.05073160311, 618.5566453116],
    [0.00000003598, 6.16903865449, 519.3960243561],
    [0.00000004161, 4.74241799712, 728.762966531],
    [0.00000003341, 5.15353140865, 1055.4497769261],
    [0.00000003019, 4.80531534819, 551.031606097],
    [0.00000002954, 0.27791550688, 1063.3140834523],
    [0.00000002859, 4.94150825865, 227.5261894396],
    [0.00000002873, 2.50045321169, 1485.9801210652],
    [0.00000002799, 4.45717734612, 539.9859058331],
    [0.00000003281, 5.86589845886, 1056.2005364515],
    [0.00000002592, 0.03988488946, 2125.8774073792],
    [0.0000000312, 2.6141036129, 1368.660252845],
    [0.00000002118, 4.8155220182, 1699.2792165032],
    [0.00000002047, 4.14126423279, 1574.8458012822],
    [0.00000002773, 2.95912332296, 3.9321532631],
    [0.0000000255, 5.59868792884, 2111.6503133776],
    [0.00000001931, 4.17348249997, 440.8252848776],
    [0.00000002088, 3.37185008818, 1685.0521225016],
    [0.00000002021, 1.47677585678, 831.8557407496],
    [0.00000002294, 0.03769707946, 21.3406410024],
    [0.00000001749, 1.95113506965, 525.0250986486],
    [0.00000001626, 2.21953197234, 302.164775655],
    [0.00000001673, 2.38708525663, 534.3568315406],
    [0.00000001462, 6.17532184467, 2428.0421830342],
    [0.00000001518, 2.54384408415, 2221.856634597],
    [0.00000001249, 0.10131731167, 1258.4539316256],
    [0.00000001162, 1.51415738925, 2008.557539159],
    [0.00000001355, 4.56146817733, 750.1036075334],
    [0.00000001038, 5.63991949724, 524.2743391232],
    [0.00000001161, 4.51697446536, 1038.0412891868],
    [0.00000001024, 4.98395147244, 535.107591066],
    [0.00000000961, 2.00070359963, 1898.3512179396],
    [0.00000001025, 2.87748450885, 2317.8358618148],
    [0.00000000947, 1.74384304582, 2214.7430875962],
    [0.00000000946, 1.42332597256, 1382.8873468466],
    [0.00000001045, 3.24587962557, 2001.4439921582],
    [0.00000000849, 4.41162044978, 511.5317178299],
    [0.00000000817, 6.22659623699, 547.8502123593],
    [0.00000000904, 0.20024344532, 1905.4647649404],
    [0.00000000788, 5.94278119191, 10.2949407385],
    [0.00000000825, 4.68155089578, 526.7702037878],
    [0.00000000819, 5.94254789616, 532.6117264014],
    [0.00000001032, 0.77806611203, 74.7815985673],
];

const Z2: &[Term] = &[
    [0.00028635326, 3.01374166973, 529.6909650946],
    [0.00003114752, 3.13228646176, 536.8045120954],
    [0.00002379765, 0.9557434534, 522.5774180938],
    [0.00001310111, 2.05263704913, 1059.3819301892],
    [0.00000898757, 0.0, 0.0],
    [0.00000305635, 4.64213318439, 7.1135470008],
    [0.00000178905, 3.65482666103, 1066.49547719],
    [0.00000123283, 0.96219015812, 515.463871093],
    [0.00000111363, 0.51687136283, 1052.2683831884],
    [0.0000011667, 2.23097397584, 1589.0728952838],
    [0.00000089255, 3.02653528025, 543.9180590962],
    [0.00000042084, 5.42941345902, 110.2063212194],
    [0.00000032518, 4.52850299232, 14.2270940016],
    [0.00000022381, 5.46658922242, 426.598190876],
    [0.00000027447, 4.3564774868, 323.5054166574],
    [0.00000024417, 5.40925475546, 103.0927742186],
    [0.00000021934, 2.6015847492, 532.8723588323],
    [0.00000018014, 1.44456471821, 526.5095713569],
    [0.00000016331, 4.92014199019, 632.7837393132],
    [0.0000001349, 2.61548577535, 525.7588118315],
    [0.00000012741, 6.03991141032, 419.4846438752],
    [0.00000011558, 4.14129213477, 1596.1864422846],
    [0.00000012105, 6.21535970722, 1045.1548361876],
    [0.00000010935, 3.67121401239, 206.1855484372],
    [0.00000009764, 2.62828951681, 95.9792272178],
    [0.00000010309, 1.56760288377, 533.6231183577],
    [0.00000009685, 2.11428054954, 316.3918696566],
    [0.00000010688, 5.53484540215, 117.3198682202],
    [0.00000009113, 2.217385633, 1162.4747044078],
    [0.00000010158, 5.2613509599, 949.1756089698],
    [0.00000009129, 2.58339505278, 2118.7638603784],
    [0.00000007323, 0.32441886121, 956.2891559706],
    [0.00000008542, 6.13497387295, 735.8765135318],
    [0.0000000623, 3.88491508621, 433.7117378768],
    [0.0000000695, 5.45832467382, 625.6701923124],
    [0.00000005452, 3.39194703981, 220.4126424388],
    [0.00000005246, 0.63975690502, 1581.959348283],
    [0.00000005007, 2.65770851102, 1169.5882514086],
    [0.00000004748, 4.70977300192, 942.062061969],
    [0.00000005092, 2.38323717238, 639.897286314],
    [0.00000003581, 3.61699400753, 1073.6090241908],
    [0.00000003354, 5.52814929602, 853.196381752],
    [0.00000003068, 1.29971318791, 508.3503240922],
    [0.00000003117, 3.4635863813, 199.0720014364],
    [0.00000003814, 4.40868990095, 330.6189636582],
    [0.00000003018, 0.40383801301, 1155.361157407],
    [0.00000002188, 3.84244897855, 309.2783226558],
    [0.00000002693, 6.25283437603, 728.762966531],
    [0.00000002334, 1.74516467151, 412.3710968744],
    [0.00000001672, 3.04994797602, 551.031606097],
    [0.00000001808, 3.23458865988, 1265.5674786264],
    [0.00000001903, 1.6889571387, 519.3960243561],
    [0.00000001647, 0.21181186037, 213.299095438],
    [0.00000001396, 4.20754455917, 846.0828347512],
    [0.00000001511, 2.62531230776, 539.9859058331],
    [0.00000001238, 1.0926731087, 838.9692877504],
    [0.00000001248, 4.45611338081, 3.1813937377],
    [0.00000001247, 4.60205535291, 21.3406410024],
    [0.00000001044, 3.49704117678, 227.5261894396],
    [0.00000001093, 3.3181830883, 1062.5633239269],
    [0.0000000101, 1.66232831337, 1692.1656695024],
    [0.00000000983, 4.31861095568, 742.9900605326],
    [0.00000000852, 2.67893555103, 440.8252848776],
    [0.00000000831, 1.3795536126, 1258.4539316256],
    [0.00000000769, 2.37777541795, 1485.9801210652],
];

const Z3: &[Term] = &[
    [0.00000964355, 4.79228412032, 529.6909650946],
    [0.00000443244, 1.39969952998, 536.8045120954],
    [0.000002956, 2.81281406373, 522.5774180938],
    [0.00000112952, 0.0, 0.0],
    [0.00000050665, 6.26062465904, 1059.3819301892],
    [0.000000291, 2.75235252681, 515.463871093],
    [0.0000002811, 2.04383406271, 1066.49547719],
    [0.00000029345, 2.85188491466, 7.1135470008],
    [0.00000025369, 1.2917522803, 543.9180590962],
    [0.0000001303, 2.54792743567, 1052.2683831884],
    [0.0000000783, 2.83309311484, 14.2270940016],
    [0.00000007174, 0.86931032544, 1589.0728952838],
    [0.0000000308, 1.89107497845, 1045.1548361876],
    [0.00000002863, 3.4329188679, 110.2063212194],
    [0.00000002242, 4.07439424068, 419.4846438752],
    [0.0000000175, 2.74912623517, 1596.1864422846],
    [0.00000001927, 2.58072071303, 323.5054166574],
    [0.00000001757, 3.91881398005, 117.3198682202],
    [0.000000013, 3.0124653574, 508.3503240922],
    [0.00000001203, 4.30217253511, 95.9792272178],
    [0.00000001186, 6.26643492221, 632.7837393132],
    [0.00000001194, 1.7658581671, 735.8765135318],
    [0.00000001052, 2.00792098419, 1073.6090241908],
    [0.00000001045, 0.09455185496, 639.897286314],
    [0.00000001131, 5.41393274707, 103.0927742186],
    [0.00000000922, 0.27894425979, 942.062061969],
    [0.00000000797, 1.55035889004, 625.6701923124],
];

const Z4: &[Term] = &[
    [0.00000046366, 5.93695398581, 536.8045120954],
    [0.00000027761, 4.80287441467, 522.5774180938],
    [0.00000005858, 4.53622024534, 515.463871093],
    [0.00000005556, 5.81670859023, 543.9180590962],
    [0.00000004183, 1.50894812038, 529.6909650946],
    [0.00000002638, 0.48959557023, 1066.49547719],
    [0.00000001614, 0.90503544737, 7.1135470008],
    [0.00000001549, 4.58690059715, 1059.3819301892],
    [0.0000000149, 4.51390841743, 1052.2683831884],
    [0.0000000113, 1.32994670268, 14.2270940016],
];

pub static JUPITER: Vsop87Table = Vsop87Table {
    variables: Variables::Rectangular,
    reference: Reference::EclipticJ2000,
    series: [
        &[X0, X1, X2, X3, X4, X5],
        &[Y0, Y1, Y2, Y3, Y4, Y5],
        &[Z0, Z1, Z2, Z3, Z4],
    ],
};
