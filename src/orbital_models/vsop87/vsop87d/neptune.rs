//! VSOP87D series for Neptune: heliocentric L, B, R on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const L0: &[Term] = &[
    [5.31188633047, 0.0, 0.0],
    [0.01798475509, 2.9010127305, 38.1330356378],
    [0.01019727662, 0.4858092366, 1.4844727083],
    [0.00124531845, 4.83008090682, 36.6485629295],
    [0.0004206445, 5.41054991607, 2.9689454166],
    [0.00037714589, 6.09221834946, 35.1640902212],
    [0.00033784734, 1.24488865578, 76.2660712756],
    [0.00016482741, 0.00007729261, 491.5579294568],
    [0.00009198582, 4.93747059924, 39.6175083461],
    [0.00008994249, 0.27462142569, 175.1660598002],
    [0.00004216235, 1.98711914364, 73.297125859],
    [0.00003364818, 1.03590121818, 33.6796175129],
    [0.000022848, 4.20606932559, 4.4534181249],
    [0.00001433512, 2.78340432711, 74.7815985673],
    [0.0000090024, 2.07606702418, 109.9456887885],
    [0.00000744996, 3.19032530145, 71.8126531507],
    [0.00000506206, 5.74785370252, 114.3991069134],
    [0.00000399552, 0.34972342569, 1021.2488945514],
    [0.00000345195, 3.46186210169, 41.1019810544],
    [0.00000306338, 0.49684039897, 0.5212648618],
    [0.00000287322, 4.50523446022, 0.0481841098],
    [0.00000323004, 2.24815188609, 32.1951448046],
    [0.00000340323, 3.30369900416, 77.7505439839],
    [0.00000266605, 4.88932609483, 0.9632078465],
    [0.00000227079, 1.79713054538, 453.424893819],
    [0.00000244722, 1.24693337933, 9.5612275556],
    [0.00000232887, 2.50459795017, 137.0330241624],
    [0.0000028217, 2.24565579693, 146.594251718],
    [0.00000251941, 5.78166597292, 388.4651552382],
    [0.0000015018, 2.99706110414, 5.9378908332],
    [0.00000170404, 3.3239063065, 108.4612160802],
    [0.00000151401, 2.1915309428, 33.9402499438],
    [0.00000148295, 0.85948986145, 111.4301614968],
    [0.00000118672, 3.67706204305, 2.4476805548],
    [0.00000101821, 5.70539236951, 0.1118745846],
    [0.00000097873, 2.80518260528, 8.0767548473],
    [0.00000103054, 4.40441222, 70.3281804424],
    [0.00000103305, 0.04078966679, 0.2606324309],
    [0.000001093, 2.41599378049, 183.2428146475],
    [0.00000073938, 1.32805041516, 529.6909650946],
    [0.00000077725, 4.16446516424, 4.192785694],
    [0.00000086379, 4.22834506045, 490.0734567485],
    [0.00000081536, 5.19908046216, 493.0424021651],
    [0.00000071503, 5.29530386579, 350.3321196004],
    [0.00000064418, 3.5454101605, 168.0525127994],
    [0.0000006257, 0.15028731465, 182.279606801],
    [0.00000058488, 3.50106873945, 145.1097790097],
    [0.00000048276, 1.11259925628, 112.9146342051],
    [0.00000047229, 4.57373229818, 46.2097904851],
    [0.00000039124, 1.6656935605, 213.299095438],
    [0.00000047728, 0.12906212461, 484.444382456],
    [0.00000046858, 3.01699530327, 498.6714764576],
    [0.00000038659, 2.38685706479, 2.9207613068],
    [0.00000047046, 4.498446604, 173.6815870919],
    [0.00000047565, 2.58404814824, 219.891377577],
    [0.00000044714, 5.47302733614, 176.6505325085],
    [0.00000032279, 3.4575915122, 30.7106720963],
    [0.00000028249, 4.13282446716, 6.592282139],
    [0.00000024433, 4.55736848232, 106.9767433719],
    [0.00000024661, 3.67822620786, 181.7583419392],
    [0.00000024505, 1.55095867965, 7.1135470008],
    [0.00000021848, 1.04366818343, 39.0962434843],
    [0.00000016936, 6.10896452834, 44.7253177768],
    [0.00000022169, 2.74932970271, 256.5399405065],
    [0.00000016614, 4.98188930613, 37.611770776],
    [0.00000017728, 3.55049134167, 1.3725981237],
    [0.00000017347, 2.1406923488, 42.5864537627],
    [0.00000014953, 3.36405649131, 98.8999885246],
    [0.00000014566, 0.69857991985, 1550.939859646],
    [0.00000015676, 6.22010212025, 454.9093665273],
    [0.00000013243, 5.61712542227, 68.8437077341],
    [0.00000014837, 3.52557245517, 25.6028626656],
    [0.00000012757, 0.04509743861, 11.0457002639],
    [0.00000011988, 4.81687553351, 24.1183899573],
    [0.0000001106, 1.78958277553, 7.4223635415],
    [0.00000012108, 1.87022663714, 79.2350166922],
    [0.00000011698, 0.49005698002, 1.5963472929],
    [0.00000010459, 2.38743199893, 381.3516082374],
    [0.00000011681, 3.85151357766, 218.4069048687],
    [0.00000008744, 0.1416856861, 148.0787244263],
    [0.00000009196, 1.00274090619, 72.0732855816],
    [0.00000011343, 0.81432278263, 525.4981794006],
    [0.00000010097, 5.03383557061, 601.7642506762],
    [0.00000008035, 1.7768572301, 0.2124483211],
    [0.00000008382, 3.07534786987, 1.2720243872],
    [0.00000010803, 2.92081211459, 293.188503436],
    [0.00000007666, 1.52223325105, 115.8835796217],
    [0.00000007531, 5.37537256533, 5.1078094307],
    [0.00000008691, 4.74352784364, 143.6253063014],
    [0.00000010183, 1.15395455831, 6244.9428143536],
    [0.00000008283, 0.35956716764, 138.5174968707],
    [0.00000009544, 4.02452832984, 152.5321425512],
    [0.00000007274, 4.10937535938, 251.4321310758],
    [0.00000007465, 1.72131945843, 31.019488637],
    [0.00000006902, 4.62452068308, 2.7083129857],
    [0.00000007094, 5.11528393609, 312.1990839626],
    [0.00000007929, 2.10765101655, 27.0873353739],
    [0.00000006156, 3.50746507109, 28.5718080822],
    [0.00000007134, 2.05292376023, 278.2588340188],
    [0.00000008193, 2.58588219154, 141.2258098564],
    [0.00000005499, 2.09250039025, 1.6969210294],
    [0.00000005279, 4.09390686798, 983.1158589136],
    [0.00000006947, 3.48041784595, 415.2918581812],
    [0.00000005916, 0.68957324226, 62.2514255951],
    [0.00000005925, 4.0250459262, 255.0554677982],
    [0.00000004606, 1.17779101436, 43.2408450685],
    [0.00000005357, 3.63061058987, 5.4166259714],
    [0.00000005918, 2.57693824084, 10175.1525105732],
    [0.00000005482, 3.0797973728, 329.8370663655],
    [0.00000003956, 5.00418696742, 184.7272873558],
    [0.00000005408, 3.31313295602, 528.2064923863],
    [0.00000004767, 4.91981150665, 456.3938392356],
    [0.0000000377, 1.57277409442, 32.7164096664],
    [0.00000003924, 4.92763242635, 180.2738692309],
    [0.00000003707, 4.82965453201, 221.3758502853],
    [0.00000003802, 4.96279204998, 594.6507036754],
    [0.00000004014, 1.6390516403, 40.5807161926],
    [0.00000003061, 0.39713858313, 1.4362885985],
    [0.00000003261, 4.65478978469, 29.226199388],
    [0.00000003474, 5.65891305944, 395.578702239],
    [0.00000002918, 5.91079083895, 1.2238402774],
    [0.00000003649, 3.88114678609, 494.5268748734],
    [0.00000003225, 5.57423738665, 1014.1353475506],
    [0.00000002845, 0.56009386585, 144.1465711632],
    [0.00000002848, 0.55423029727, 567.8240007324],
    [0.0000000344, 1.70887250883, 12.5301729722],
    [0.00000003267, 5.6328779982, 488.5889840402],
    [0.00000003107, 5.79335949207, 105.4922706636],
    [0.00000002712, 2.43726364359, 60.7669528868],
    [0.00000003202, 2.21483496593, 41.0537969446],
    [0.00000003134, 4.69665220513, 82.8583534146],
    [0.0000000359, 5.69939670162, 1124.34166877],
    [0.00000002967, 0.54448940101, 135.5485514541],
    [0.00000003211, 4.19927605853, 291.7040307277],
    [0.00000002899, 5.99669788291, 22.633917249],
    [0.00000003143, 2.93495725805, 31.2319369581],
    [0.00000002729, 4.62707721219, 5.6290742925],
    [0.00000002513, 5.60391563025, 19.1224551112],
    [0.0000000269, 5.32070128202, 2.0057375701],
    [0.0000000263, 6.00855841124, 37.1698277913],
    [0.00000002296, 6.06934502789, 451.9404211107],
    [0.00000002858, 4.88677262419, 258.0244132148],
    [0.00000002879, 5.12239168488, 38.6543004996],
    [0.0000000227, 2.08634524182, 30.0562807905],
    [0.00000002301, 3.35951602914, 1028.3624415522],
    [0.00000003001, 3.59143817947, 211.8146227297],
    [0.00000002237, 0.3845555347, 3.6233367224],
    [0.00000002901, 3.24755614136, 366.485629295],
    [0.00000002592, 1.36262641469, 35.4247226521],
    [0.00000002418, 4.93467056526, 47.6942631934],
    [0.00000002089, 5.79838063413, 4.665866446],
    [0.00000002586, 2.69392971321, 38.1812197476],
    [0.00000001913, 5.53560681085, 149.5631971346],
    [0.00000001971, 6.00790964671, 34.2008823747],
    [0.00000002586, 6.24984047544, 38.084851528],
    [0.00000002098, 4.57819744766, 1019.7644218431],
    [0.00000001869, 3.85907708723, 911.042573332],
    [0.00000002486, 5.21235809332, 140.001969579],
    [0.00000001795, 1.68012868451, 1059.3819301892],
    [0.00000002326, 2.82664069146, 807.9497991134],
    [0.00000001984, 5.54763522932, 1022.7333672597],
    [0.00000001919, 5.10717766499, 216.9224321604],
    [0.00000002004, 5.47811228948, 63.7358983034],
    [0.00000002021, 4.15631916516, 178.1350052168],
    [0.0000000176, 6.00927149342, 172.1971143836],
    [0.0000000214, 2.65037925793, 700.6642392008],
    [0.00000001988, 3.3585027278, 186.2117600641],
    [0.00000001956, 5.01527508588, 294.6729761443],
    [0.00000001966, 4.07957525462, 20.6069278195],
    [0.00000001637, 0.53823942149, 67.3592350258],
    [0.0000000154, 2.62327849119, 41.7563723602],
    [0.0000000181, 5.81430038477, 129.9194771616],
    [0.00000001776, 4.37047808449, 328.3525936572],
    [0.0000000146, 2.63664516309, 2.857070832],
    [0.00000001388, 2.10598045632, 3.9321532631],
    [0.00000001352, 0.55618245459, 0.6543913058],
    [0.00000001668, 2.77543377384, 16.1535096946],
    [0.00000001338, 0.37643611305, 14.0146456805],
    [0.00000001218, 0.7345643475, 426.598190876],
    [0.00000001531, 4.54891769768, 526.722019678],
    [0.0000000161, 3.40993944436, 403.1341922245],
    [0.00000001361, 4.48227243414, 17.6379824029],
    [0.00000001589, 5.59323020112, 3302.479391062],
    [0.00000001132, 5.6452072536, 151.0476698429],
    [0.00000001357, 4.0639903143, 26.826702943],
    [0.00000001494, 4.98692049495, 666.723989257],
    [0.00000001077, 4.3091147025, 0.6331394464],
    [0.00000001042, 6.02756893581, 106.0135355254],
    [0.0000000106, 0.74679491358, 487.3651437628],
    [0.0000000131, 3.7852638093, 386.9806825299],
    [0.00000001342, 4.52685061062, 563.6312150384],
    [0.00000000986, 0.00600924269, 81.3738807063],
    [0.00000001232, 5.17443930901, 331.3215390738],
    [0.00000000929, 4.51267465978, 38.3936680687],
    [0.00000000956, 3.5044779102, 64.9597385808],
    [0.00000000929, 4.43109514438, 37.8724032069],
    [0.00000000926, 6.09803297747, 4.1446015842],
    [0.00000000972, 0.59038366513, 8.9068362498],
    [0.00000001246, 4.69840351226, 389.9496279465],
    [0.00000001009, 5.98451242784, 142.1408335931],
    [0.0000000102, 0.832338923, 39.3568759152],
    [0.00000001013, 0.37845630298, 36.9091953604],
    [0.0000000094, 2.42688145966, 343.2185725996],
    [0.00000000974, 5.23958752786, 253.5709950899],
    [0.00000000964, 5.09748190218, 357.4456666012],
    [0.00000000835, 1.4556862667, 35.212274331],
    [0.00000001077, 0.71409061316, 44.070926471],
    [0.00000001083, 2.27578897621, 6.9010986797],
    [0.00000000938, 5.03471583911, 69.3649725959],
    [0.00000001078, 1.20253141912, 35.685355083],
    [0.00000001027, 0.18243183397, 84.3428261229],
    [0.00000000764, 4.62720907712, 0.8300814025],
    [0.00000001013, 0.42234855022, 32.4557772355],
    [0.00000000939, 4.50445799766, 365.0011565867],
    [0.00000000756, 0.82872484717, 17.5261078183],
    [0.00000000916, 3.89409205418, 38.2449102224],
    [0.00000000736, 4.78125743795, 5.3684418616],
    [0.00000000762, 0.0189733713, 189.3931538018],
    [0.00000000738, 2.31770478416, 42.3258213318],
    [0.0000000086, 4.82440483506, 210.3301500214],
    [0.00000000888, 3.20360339895, 348.8476468921],
    [0.00000000916, 5.04967792934, 38.0211610532],
    [0.00000000638, 0.63267396269, 244.318584075],
    [0.00000000636, 1.02615137352, 2080.6308247406],
    [0.00000000774, 5.44432678139, 367.9701020033],
    [0.00000000644, 1.94044989547, 446.3113468182],
    [0.00000000631, 4.82928491724, 460.5384408198],
    [0.00000000855, 3.57592750113, 439.782755154],
    [0.00000000678, 4.48687912809, 351.8165923087],
    [0.00000000724, 4.8914160928, 119.5069163441],
    [0.00000000594, 0.59315717529, 491.036664595],
    [0.00000000655, 1.99014093, 19.0105805266],
    [0.0000000058, 2.57189536188, 492.0791943186],
    [0.00000000694, 0.08328521209, 5.6772584023],
    [0.00000000733, 5.81485239057, 29.7474642498],
    [0.00000000666, 3.42196897591, 179.0982130633],
    [0.00000000678, 0.29428615814, 171.2339065371],
    [0.00000000635, 2.13805182663, 164.1203595363],
    [0.00000000623, 5.6145494038, 285.3723810196],
    [0.00000000529, 1.88063108785, 416.7763308895],
    [0.00000000529, 5.1325078803, 697.743477894],
    [0.000000005, 1.49548514415, 704.8570248948],
    [0.00000000487, 4.97772067947, 274.0660483248],
    [0.00000000666, 6.26456825266, 1474.6737883704],
    [0.00000000532, 0.25784352716, 477.3308354552],
    [0.00000000557, 0.71378452161, 80.7194894005],
    [0.00000000556, 2.60791360513, 418.2608035978],
    [0.00000000584, 4.29064541383, 16.6747745564],
    [0.00000000524, 5.4275939228, 290.2195580194],
    [0.00000000524, 0.29054995359, 247.2393453818],
    [0.00000000541, 4.36400580938, 815.0633461142],
    [0.00000000526, 1.66512720297, 97.4155158163],
    [0.00000000497, 4.72640318293, 401.6497195162],
    [0.00000000432, 2.98481475894, 100.3844612329],
    [0.00000000382, 0.28067758468, 8.385571388],
    [0.00000000424, 6.16774845481, 178.7893965226],
    [0.00000000484, 0.01535318279, 738.7972748386],
    [0.00000000518, 4.4891659141, 875.830299001],
    [0.00000000506, 5.38611121207, 404.6186649328],
    [0.00000000396, 4.62747640832, 6.1503391543],
    [0.00000000466, 0.23340415764, 120.9913890524],
    [0.00000000409, 3.08849480895, 59.2824801785],
    [0.0000000047, 5.01853200224, 313.6835566709],
    [0.00000000442, 3.68919475089, 457.8783119439],
    [0.00000000384, 3.69499925394, 160.9389657986],
    [0.00000000364, 0.76192181046, 104.0077979553],
    [0.00000000416, 0.26652109651, 103.0927742186],
    [0.00000000401, 4.06530055968, 14.6690369863],
    [0.00000000454, 3.72767803715, 476.4313180835],
    [0.00000000434, 0.335338022, 984.6003316219],
    [0.0000000034, 0.99915726716, 31.5407534988],
    [0.0000000042, 3.65147769268, 20.4950532349],
    [0.00000000334, 0.35121412008, 1227.4344429886],
    [0.00000000323, 5.45836731979, 918.1561203328],
    [0.00000000407, 4.19457842203, 309.7995875176],
    [0.00000000381, 0.0136485696, 495.4900827199],
    [0.00000000334, 4.05924071124, 8.3373872782],
    [0.0000000038, 3.17063415023, 487.6257761937],
    [0.00000000309, 0.48352303405, 118.0224436358],
    [0.0000000038, 2.70238752925, 134.1122628556],
    [0.00000000362, 4.8898581061, 438.2982824457],
    [0.00000000327, 2.91090790412, 505.7850234584],
    [0.00000000308, 0.96082817124, 21.1494445407],
    [0.00000000288, 1.48123872077, 220.4126424388],
    [0.00000000293, 2.56582281789, 662.531203563],
    [0.00000000331, 4.37715965811, 180.7951340927],
    [0.00000000326, 2.46104924164, 169.5369855077],
    [0.00000000289, 2.63591886391, 55.7710180407],
    [0.00000000288, 5.02487283285, 1440.7335384266],
    [0.00000000344, 1.4893099727, 166.5680400911],
    [0.00000000266, 0.63672427386, 79.1868325824],
    [0.00000000268, 5.02354540478, 377.4194549743],
    [0.00000000308, 1.50185265748, 77.2292791221],
    [0.00000000324, 5.30240189273, 457.617679513],
    [0.00000000265, 1.087366328, 450.4559484024],
    [0.00000000264, 0.83337660655, 488.3765357191],
    [0.0000000029, 1.80003152563, 101.8689339412],
    [0.00000000262, 2.3039000336, 494.7393231945],
    [0.00000000325, 5.52669889053, 441.2672278623],
    [0.00000000254, 0.02963623277, 117.36805233],
    [0.000000003, 0.1743570554, 252.9166037841],
    [0.00000000315, 5.3488501304, 183.7640795093],
    [0.00000000313, 5.45945846595, 13.4933808187],
    [0.00000000306, 5.23085809622, 45.2465826386],
    [0.00000000237, 0.32676889138, 208.8456773131],
    [0.00000000263, 2.66670785888, 464.7312265138],
    [0.00000000234, 1.82700149824, 52175.8062831484],
    [0.00000000275, 5.04385701142, 156.1554792736],
    [0.00000000265, 5.64967127743, 326.8681209489],
    [0.00000000247, 1.74540930625, 65.8747623175],
    [0.00000000269, 6.09827783249, 1654.0326338646],
    [0.00000000229, 2.25832077914, 190.665178189],
    [0.00000000294, 5.45249564193, 206.1855484372],
    [0.00000000238, 1.55647021369, 79.889407998],
    [0.0000000023, 6.13158632762, 178.3474535379],
    [0.00000000274, 4.10829870815, 518.3846323998],
    [0.00000000225, 3.86300359251, 171.9846660625],
    [0.00000000228, 2.48511565618, 12566.1516999828],
    [0.00000000272, 5.61149862463, 148.3393568572],
    [0.00000000214, 1.45987216039, 522.5774180938],
    [0.00000000211, 4.04791980901, 6205.3253060075],
    [0.00000000266, 0.99036038827, 209.106309744],
    [0.0000000023, 0.5404995153, 532.6117264014],
    [0.00000000226, 3.8415296162, 283.6272758804],
    [0.00000000243, 5.32730346969, 485.9288551643],
    [0.00000000209, 4.35051470487, 536.8045120954],
    [0.00000000232, 3.01948719112, 10.9338256793],
    [0.00000000264, 5.70536379124, 490.3340891794],
    [0.0000000028, 3.99993658196, 674.8007441043],
    [0.00000000246, 0.37698964335, 157.6399519819],
    [0.00000000219, 5.67679857772, 52099.5402118728],
    [0.00000000251, 1.52353965506, 6.8529145699],
    [0.00000000203, 5.44328656642, 145.6310438715],
    [0.00000000238, 0.96169723853, 497.1870037493],
    [0.00000000219, 4.52300776062, 1615.8995982268],
    [0.00000000275, 2.37619210741, 2118.7638603784],
    [0.00000000258, 5.1244814878, 608.877797677],
    [0.0000000026, 3.88543008475, 513.079881013],
    [0.00000000191, 3.72574595369, 65.2203710117],
    [0.00000000211, 0.06484535455, 215.4379594521],
    [0.00000000236, 3.95835282821, 141.4864422873],
    [0.00000000189, 5.28135043909, 377.1588225434],
    [0.00000000243, 4.35559878377, 482.9599097477],
    [0.00000000243, 6.06808644973, 154.0166152595],
    [0.00000000249, 1.57215637373, 14.2270940016],
    [0.00000000238, 1.93340192445, 500.1559491659],
    [0.00000000209, 5.02893682321, 364.559213602],
    [0.00000000227, 5.7298429854, 1543.8263126452],
    [0.00000000217, 2.45036922991, 187.1749679106],
    [0.00000000181, 1.65699502247, 1627.2059309216],
    [0.00000000214, 1.60213179145, 11.3063326948],
    [0.00000000203, 0.74638490279, 14.5571624017],
    [0.00000000192, 3.17719161639, 343.4792050305],
    [0.00000000177, 1.50027795761, 9.449352971],
    [0.00000000177, 0.03038098292, 165.6048322446],
    [0.00000000176, 4.64462444674, 315.1680293792],
    [0.00000000208, 2.65835778368, 496.0113475817],
    [0.00000000174, 2.76155855705, 49.1787359017],
    [0.00000000196, 1.95549714182, 335.7749571987],
    [0.000000002, 4.16839394758, 285.1117485887],
    [0.00000000199, 0.06168021293, 73.5577582899],
    [0.00000000188, 6.17288913873, 535.3200393871],
    [0.00000000215, 1.92414563346, 552.6973893591],
    [0.00000000166, 5.4903813969, 10135.5350022271],
    [0.00000000192, 0.9697343412, 304.2342036999],
    [0.00000000209, 5.34065233845, 13.642138665],
    [0.00000000203, 5.11234865419, 324.7292569348],
    [0.00000000177, 3.5068084179, 207.3612046048],
    [0.00000000174, 1.95010708561, 319.3126309634],
    [0.00000000187, 5.57685931698, 266.1011680621],
    [0.00000000181, 1.43525075751, 279.7433067271],
    [0.00000000165, 4.00537112057, 493.5636670269],
    [0.00000000191, 1.68313683465, 563.3705826075],
    [0.00000000173, 3.93200456456, 238.9019581036],
    [0.00000000161, 5.96143146317, 36.1272980677],
    [0.00000000194, 2.3766423145, 944.9828232758],
    [0.00000000165, 0.97421918976, 556.5176680376],
    [0.00000000189, 1.11279570541, 1127.2624300768],
    [0.00000000172, 0.75085513952, 267.5856407704],
    [0.00000000193, 2.12636756833, 20350.3050211464],
    [0.00000000181, 2.1081456208, 113.8778420516],
    [0.00000000194, 1.13504964219, 57.255490749],
    [0.00000000181, 6.23699820519, 355.9611938929],
    [0.00000000198, 5.68125942959, 6280.1069045748],
    [0.00000000173, 5.15083799917, 474.9468453752],
    [0.00000000151, 1.66981962338, 116.5379709275],
    [0.0000000015, 5.42593657173, 526.9826521089],
    [0.00000000205, 4.16096717573, 711.4493070338],
    [0.00000000177, 3.49360697678, 421.2297490144],
    [0.00000000168, 0.52839230204, 487.1045113319],
    [0.0000000016, 4.77712663799, 524.0137066923],
    [0.00000000145, 2.81448128781, 1512.8068240082],
    [0.00000000146, 4.9957011266, 142.6620984549],
    [0.00000000188, 0.8210416155, 10210.3166007944],
    [0.00000000145, 4.96888131586, 1189.3014073508],
    [0.00000000181, 2.9970479059, 75.7448064138],
    [0.00000000176, 0.41626373842, 222.8603229936],
    [0.00000000137, 2.96534226337, 6206.8097787158],
    [0.00000000138, 1.22260849471, 187.6962327724],
    [0.00000000128, 2.53394068407, 276.7743613105],
    [0.0000000013, 3.04810765699, 310.7146112543],
    [0.00000000122, 3.01323006886, 70.8494453042],
    [0.00000000111, 0.77449448649, 179.3588454942],
    [0.00000000141, 0.18423889807, 131.4039498699],
    [0.00000000126, 5.77648809669, 525.2375469697],
    [0.00000000124, 2.93225731024, 179.6194779251],
    [0.00000000111, 6.18471578216, 981.6313862053],
    [0.00000000141, 2.63342951123, 381.6122406683],
    [0.0000000011, 5.25053027081, 986.0848043302],
    [0.00000000096, 3.86591534559, 240.125798381],
    [0.0000000012, 3.78755085035, 1057.8974574809],
    [0.00000000093, 4.54014016637, 36.6967470393],
    [0.00000000109, 1.533275859, 419.7452763061],
    [0.00000000094, 4.21870300178, 1024.217839968],
    [0.00000000109, 2.15905156247, 289.5651667136],
    [0.00000000104, 0.20665642552, 564.8550553158],
    [0.00000000081, 1.89134135215, 36.6003788197],
    [0.0000000008, 4.38832594589, 10137.0194749354],
    [0.0000000008, 1.73940577376, 39.5056337615],
    [0.00000000084, 0.81316746605, 170.7126416753],
    [0.0000000009, 0.60145818457, 36.7604375141],
    [0.00000000074, 4.92511651321, 1549.4553869377],
    [0.00000000072, 5.06852406179, 249.9476583675],
];

const L1: &[Term] = &[
    [38.37687716731, 0.0, 0.0],
    [0.00016604187, 4.86319129565, 1.4844727083],
    [0.00015807148, 2.27923488532, 38.1330356378],
    [0.00003334701, 3.6819967602, 76.2660712756],
    [0.0000130584, 3.67320813491, 2.9689454166],
    [0.00000604832, 1.50477747549, 35.1640902212],
    [0.00000178623, 3.45318524147, 39.6175083461],
    [0.00000106537, 2.45126138334, 4.4534181249],
    [0.00000105747, 2.7547932655, 33.6796175129],
    [0.00000072684, 5.48724732699, 36.6485629295],
    [0.00000057069, 5.2164980497, 0.5212648618],
    [0.00000057355, 1.85767603384, 114.3991069134],
    [0.00000035368, 4.51676827545, 74.7815985673],
    [0.00000032216, 5.9041148968, 77.7505439839],
    [0.00000029871, 3.67043294114, 388.4651552382],
    [0.00000028866, 5.16877529164, 9.5612275556],
    [0.00000028742, 5.16732589024, 2.4476805548],
    [0.00000025507, 5.24526281928, 168.0525127994],
    [0.00000024869, 4.7319306781, 182.279606801],
    [0.00000020205, 5.78945415677, 1021.2488945514],
    [0.00000019022, 1.82981144269, 484.444382456],
    [0.00000018661, 1.31606255521, 498.6714764576],
    [0.00000015063, 4.9500389376, 137.0330241624],
    [0.00000015094, 3.9870525494, 32.1951448046],
    [0.0000001072, 2.44148149225, 4.192785694],
    [0.00000011725, 4.89255650674, 71.8126531507],
    [0.00000009581, 1.23188039594, 5.9378908332],
    [0.00000009606, 1.88534821556, 41.1019810544],
    [0.00000008968, 0.01758559103, 8.0767548473],
    [0.00000009882, 6.08165628679, 7.1135470008],
    [0.00000007632, 5.51307048241, 73.297125859],
    [0.00000006992, 0.61688864282, 2.9207613068],
    [0.00000005543, 2.24141557794, 46.2097904851],
    [0.00000004845, 3.7105582375, 112.9146342051],
    [0.000000037, 5.25713252333, 111.4301614968],
    [0.00000003233, 6.10303038418, 70.3281804424],
    [0.00000002939, 4.86520586648, 98.8999885246],
    [0.00000002403, 2.90637675099, 601.7642506762],
    [0.00000002398, 1.04343654629, 6.592282139],
    [0.00000002784, 4.95821114677, 108.4612160802],
    [0.00000002894, 4.20148844767, 381.3516082374],
    [0.00000002111, 5.93089610785, 25.6028626656],
    [0.00000002075, 5.20632201951, 30.7106720963],
    [0.00000002126, 0.54976393136, 41.0537969446],
    [0.00000002235, 2.38045158073, 453.424893819],
    [0.00000001859, 0.89409373259, 24.1183899573],
    [0.00000002018, 3.42245274178, 31.019488637],
    [0.000000017, 3.91715254287, 11.0457002639],
    [0.00000001776, 3.86571077241, 395.578702239],
    [0.00000001644, 0.15855999051, 152.5321425512],
    [0.00000001646, 3.34591387314, 44.7253177768],
    [0.00000001876, 2.59784179105, 33.9402499438],
    [0.00000001614, 0.42137145545, 175.1660598002],
    [0.00000001468, 6.12983933526, 1550.939859646],
    [0.00000001408, 6.13722948564, 490.0734567485],
    [0.00000001207, 0.59525736062, 312.1990839626],
    [0.00000001336, 3.28611928206, 493.0424021651],
    [0.00000001176, 5.87266726996, 5.4166259714],
    [0.00000001517, 3.12967210501, 491.5579294568],
    [0.00000001053, 4.6037551683, 79.2350166922],
    [0.00000001037, 4.89007314395, 1.2720243872],
    [0.00000001034, 5.93741289103, 32.7164096664],
    [0.00000001038, 1.13470380744, 1014.1353475506],
    [0.00000001002, 1.85850922283, 5.1078094307],
    [0.00000000983, 0.05345050384, 7.4223635415],
    [0.00000000998, 1.73689827444, 1028.3624415522],
    [0.00000001193, 4.63176675581, 60.7669528868],
    [0.0000000094, 3.09103721222, 62.2514255951],
    [0.00000000994, 4.11489180313, 4.665866446],
    [0.0000000089, 0.87049255398, 31.2319369581],
    [0.00000000852, 5.35508394316, 144.1465711632],
    [0.00000000922, 5.12373360511, 145.1097790097],
    [0.00000000789, 0.37496785039, 26.826702943],
    [0.00000000828, 4.060351946, 115.8835796217],
    [0.00000000711, 3.14189997439, 278.2588340188],
    [0.00000000727, 1.39718382835, 213.299095438],
    [0.00000000781, 0.10946327923, 173.6815870919],
    [0.00000000793, 6.13086312116, 567.8240007324],
    [0.00000000669, 4.50554989443, 27.0873353739],
    [0.00000000825, 1.35568908148, 129.9194771616],
    [0.00000000738, 3.5676601896, 176.6505325085],
    [0.00000000714, 6.24797992301, 106.9767433719],
    [0.00000000654, 1.13177751192, 68.8437077341],
    [0.00000000624, 0.01567750666, 28.5718080822],
    [0.00000000608, 4.60180625368, 189.3931538018],
    [0.00000000595, 0.00857468445, 42.5864537627],
    [0.0000000053, 5.61201247153, 12.5301729722],
    [0.00000000521, 1.02371768017, 415.2918581812],
    [0.00000000639, 0.68930265745, 529.6909650946],
    [0.00000000526, 3.02138731705, 5.6290742925],
    [0.00000000456, 4.44331571392, 43.2408450685],
    [0.00000000524, 3.43316448349, 38.6543004996],
    [0.00000000436, 2.41630174435, 82.8583534146],
    [0.00000000424, 1.95736011325, 477.3308354552],
    [0.00000000443, 3.39350946329, 357.4456666012],
    [0.00000000383, 1.90232196422, 22.633917249],
    [0.00000000479, 5.55141744216, 37.611770776],
    [0.00000000462, 3.80436154644, 343.2185725996],
    [0.00000000384, 5.60377408953, 594.6507036754],
    [0.00000000369, 4.45577410338, 6.9010986797],
    [0.00000000358, 3.69126616347, 3.9321532631],
    [0.00000000352, 3.10952926034, 135.5485514541],
    [0.00000000368, 3.53577440355, 40.5807161926],
    [0.00000000424, 5.27159202779, 181.7583419392],
    [0.00000000361, 0.29018303419, 72.0732855816],
    [0.0000000039, 5.49512204296, 350.3321196004],
    [0.00000000378, 2.74122401337, 488.3765357191],
    [0.00000000372, 0.39980033572, 494.7393231945],
    [0.00000000353, 1.10614174053, 20.6069278195],
    [0.00000000296, 0.86351261285, 149.5631971346],
    [0.00000000307, 5.39420288683, 160.9389657986],
    [0.00000000395, 1.93577214824, 10137.0194749354],
    [0.00000000288, 2.28755739359, 47.6942631934],
    [0.00000000295, 2.4873753724, 19.1224551112],
    [0.0000000029, 0.18636083306, 143.6253063014],
    [0.00000000266, 3.09977370364, 69.3649725959],
    [0.00000000266, 1.21002824826, 505.7850234584],
    [0.00000000252, 3.12745026026, 460.5384408198],
    [0.00000000328, 0.50849285663, 6206.8097787158],
    [0.00000000257, 3.64119914774, 446.3113468182],
    [0.00000000239, 5.54080102299, 911.042573332],
    [0.00000000265, 0.62702473701, 253.5709950899],
    [0.00000000287, 2.44403568436, 16.6747745564],
    [0.00000000231, 2.47026250085, 454.9093665273],
    [0.0000000023, 3.24571542922, 1066.49547719],
    [0.00000000282, 1.48595620175, 983.1158589136],
    [0.00000000212, 5.41931177641, 64.9597385808],
    [0.00000000213, 1.64175339637, 1089.129394439],
    [0.00000000238, 2.69801319489, 882.9438460018],
    [0.0000000021, 4.53976756699, 1093.322180133],
    [0.0000000022, 2.30038816175, 1052.2683831884],
    [0.00000000256, 0.4207359846, 23.9059416362],
    [0.00000000216, 5.4422591887, 39.0962434843],
    [0.00000000201, 2.58746514605, 119.5069163441],
    [0.00000000224, 4.43751392203, 639.897286314],
    [0.00000000186, 2.50651218075, 487.3651437628],
    [0.00000000189, 4.05785534221, 120.9913890524],
    [0.00000000184, 2.24245977278, 815.0633461142],
    [0.00000000202, 3.43517732411, 45.2465826386],
    [0.00000000175, 4.49165234532, 171.2339065371],
    [0.00000000171, 5.50633466316, 179.0982130633],
    [0.000000002, 6.12663205401, 14.2270940016],
    [0.00000000173, 2.61090344107, 389.9496279465],
    [0.00000000167, 3.94754384833, 77.2292791221],
    [0.00000000166, 3.41009128748, 81.3738807063],
    [0.00000000163, 3.88198848446, 556.5176680376],
    [0.00000000164, 1.49614763046, 63.7358983034],
    [0.00000000176, 3.86129425367, 148.3393568572],
    [0.00000000161, 2.22215642318, 574.9375477332],
    [0.00000000171, 0.66899426684, 179.3106613844],
    [0.00000000161, 1.21480182441, 1024.4302882891],
    [0.00000000155, 3.25842414799, 10251.4185818488],
    [0.00000000183, 5.45168150656, 218.4069048687],
    [0.00000000152, 3.35145509017, 285.3723810196],
    [0.00000000152, 0.42398786475, 274.0660483248],
    [0.00000000146, 5.70714579127, 419.4846438752],
    [0.00000000156, 0.6432152487, 1029.8469142605],
    [0.00000000147, 4.3095893074, 157.6399519819],
    [0.00000000147, 1.8068917751, 377.4194549743],
    [0.0000000014, 1.49826604627, 386.9806825299],
    [0.00000000137, 2.14480243915, 563.6312150384],
    [0.00000000127, 3.9872659971, 84.3428261229],
    [0.00000000134, 4.16039455079, 169.5369855077],
    [0.00000000121, 0.29300927469, 206.1855484372],
    [0.00000000129, 2.6762505701, 180.7951340927],
    [0.00000000134, 3.18868986487, 166.5680400911],
    [0.00000000135, 5.0751756178, 426.598190876],
    [0.00000000136, 1.8167245174, 151.0476698429],
    [0.00000000129, 3.64795525602, 183.7640795093],
    [0.00000000116, 6.06435563172, 220.4126424388],
    [0.00000000123, 4.46641157829, 1022.7333672597],
    [0.00000000112, 4.34485256988, 138.5174968707],
    [0.00000000116, 5.58946529961, 35.685355083],
    [0.00000000108, 1.03796693383, 488.5889840402],
    [0.00000000108, 2.1037848588, 494.5268748734],
    [0.00000000106, 0.87068583107, 1059.3819301892],
    [0.00000000097, 0.74486741478, 485.9288551643],
    [0.00000000095, 5.54259914856, 497.1870037493],
    [0.00000000085, 3.16062141266, 522.5774180938],
    [0.00000000097, 6.05634803604, 482.9599097477],
    [0.00000000095, 0.2311185273, 500.1559491659],
    [0.00000000084, 2.64687252518, 536.8045120954],
    [0.00000000074, 3.90678924318, 1019.7644218431],
];

const L2: &[Term] = &[
    [0.00053892649, 0.0, 0.0],
    [0.00000281251, 1.19084538887, 38.1330356378],
    [0.00000295693, 1.85520292248, 1.4844727083],
    [0.0000027019, 5.72143228148, 76.2660712756],
    [0.00000023023, 1.21035596452, 2.9689454166],
    [0.00000007333, 0.5403330683, 2.4476805548],
    [0.00000009057, 4.42544992035, 35.1640902212],
    [0.00000005223, 0.67427930044, 168.0525127994],
    [0.00000005201, 3.02338671812, 182.279606801],
    [0.00000004288, 3.84351844003, 114.3991069134],
    [0.00000003925, 3.53214557374, 484.444382456],
    [0.00000003741, 5.90238217874, 498.6714764576],
    [0.00000002966, 0.31002477611, 4.4534181249],
    [0.00000003415, 0.55971639038, 74.7815985673],
    [0.00000003255, 1.84921884906, 175.1660598002],
    [0.00000002157, 1.89135758747, 388.4651552382],
    [0.00000002211, 4.3799709224, 7.1135470008],
    [0.00000001847, 3.48574435762, 9.5612275556],
    [0.00000002451, 4.68586840176, 491.5579294568],
    [0.00000001844, 5.12281562096, 33.6796175129],
    [0.00000002204, 1.69321574906, 77.7505439839],
    [0.00000001652, 2.55859494053, 36.6485629295],
    [0.00000001309, 4.52400192922, 1021.2488945514],
    [0.00000001124, 0.38710602242, 137.0330241624],
    [0.00000000664, 0.88101734307, 4.192785694],
    [0.00000000497, 2.24615784762, 395.578702239],
    [0.00000000512, 6.22609200672, 381.3516082374],
    [0.00000000582, 5.25716719826, 31.019488637],
    [0.00000000446, 0.36647221351, 98.8999885246],
    [0.00000000383, 5.48585528762, 5.9378908332],
    [0.00000000375, 4.61250246774, 8.0767548473],
    [0.00000000354, 1.30783918287, 601.7642506762],
    [0.00000000259, 5.66033623678, 112.9146342051],
    [0.00000000247, 2.89695614593, 189.3931538018],
    [0.00000000245, 4.26572913391, 220.4126424388],
    [0.000000002, 0.52604535784, 64.9597385808],
    [0.00000000191, 4.88786653062, 39.6175083461],
    [0.00000000233, 3.16423779113, 41.1019810544],
    [0.00000000248, 5.85877831382, 1059.3819301892],
    [0.00000000194, 2.37949641473, 73.297125859],
    [0.00000000227, 0.20028518978, 60.7669528868],
    [0.00000000184, 3.01962045713, 1014.1353475506],
    [0.0000000019, 5.57500985081, 343.2185725996],
    [0.00000000172, 3.66036463613, 477.3308354552],
    [0.00000000172, 0.59550457102, 46.2097904851],
    [0.00000000182, 1.92429384025, 183.7640795093],
    [0.00000000171, 1.61368476689, 357.4456666012],
    [0.00000000173, 6.23717119485, 493.0424021651],
    [0.00000000217, 1.46218158211, 71.8126531507],
    [0.00000000178, 0.34928799031, 1028.3624415522],
    [0.00000000169, 4.91086673212, 166.5680400911],
    [0.00000000157, 5.89200571154, 169.5369855077],
    [0.00000000182, 2.33457064554, 152.5321425512],
    [0.00000000151, 3.81621340568, 146.594251718],
    [0.00000000136, 2.75150881988, 144.1465711632],
    [0.00000000104, 6.03262825314, 529.6909650946],
    [0.00000000076, 0.20932812381, 453.424893819],
];

const L3: &[Term] = &[
    [0.00000031254, 0.0, 0.0],
    [0.00000012461, 6.04431418812, 1.4844727083],
    [0.00000014541, 1.35337075856, 76.2660712756],
    [0.00000011547, 6.11257808366, 38.1330356378],
    [0.00000001351, 4.93951495175, 2.9689454166],
    [0.00000000741, 2.35936954597, 168.0525127994],
    [0.00000000715, 1.27409542804, 182.279606801],
    [0.00000000537, 5.23632185196, 484.444382456],
    [0.00000000523, 4.16769839601, 498.6714764576],
    [0.00000000664, 0.55871435877, 31.019488637],
    [0.00000000301, 2.69253200796, 7.1135470008],
    [0.00000000194, 2.05904114139, 137.0330241624],
    [0.00000000206, 2.51012178002, 74.7815985673],
    [0.0000000016, 5.63111039032, 114.3991069134],
    [0.00000000149, 3.09327713923, 35.1640902212],
];

const L4: &[Term] = &[
    [0.00000113998, PI, 0.0],
    [0.00000000605, 3.18211885677, 76.2660712756],
];

const L5: &[Term] = &[
    [0.00000000874, PI, 0.0],
];

const B0: &[Term] = &[
    [0.03088622933, 1.44104372626, 38.1330356378],
    [0.00027780087, 5.91271882843, 76.2660712756],
    [0.00027623609, 0.0, 0.0],
    [0.0001535549, 2.52123799481, 36.6485629295],
    [0.00015448133, 3.50877080888, 39.6175083461],
    [0.00001999919, 1.50998669505, 74.7815985673],
    [0.0000196754, 4.37778195768, 1.4844727083],
    [0.00001015137, 3.21561035875, 35.1640902212],
    [0.00000605767, 2.80246601405, 73.297125859],
    [0.00000594878, 2.12892708114, 41.1019810544],
    [0.00000588805, 3.18655882497, 2.9689454166],
    [0.0000040183, 4.16883287237, 114.3991069134],
    [0.00000254333, 3.27120499438, 453.424893819],
    [0.00000261647, 3.76722704749, 213.299095438],
    [0.00000279964, 1.68165309699, 77.7505439839],
    [0.0000020559, 4.25652348864, 529.6909650946],
    [0.00000140455, 3.52969556376, 137.0330241624],
    [0.0000009853, 4.16774829927, 33.6796175129],
    [0.00000051257, 1.95121181203, 4.4534181249],
    [0.00000067971, 4.66970781659, 71.8126531507],
    [0.00000041931, 5.41783694467, 111.4301614968],
    [0.00000041822, 5.94832001477, 112.9146342051],
    [0.00000030637, 0.93620571932, 42.5864537627],
    [0.00000011084, 5.88898793049, 108.4612160802],
    [0.0000000962, 0.03944255108, 70.3281804424],
    [0.00000009664, 0.22455797403, 79.2350166922],
    [0.00000009728, 5.30069593532, 32.1951448046],
    [0.00000007386, 3.00684933642, 426.598190876],
    [0.00000007087, 0.12535040656, 109.9456887885],
    [0.00000006021, 6.20514068152, 115.8835796217],
    [0.00000006169, 3.62098109648, 983.1158589136],
    [0.00000004777, 0.75210194972, 5.9378908332],
    [0.00000006391, 5.8464610106, 148.0787244263],
    [0.00000006251, 2.41678769385, 152.5321425512],
    [0.00000004539, 5.581820987, 175.1660598002],
    [0.00000005006, 4.60815664851, 1059.3819301892],
    [0.00000004289, 4.19647392821, 47.6942631934],
    [0.00000005795, 5.07516716087, 415.2918581812],
    [0.00000004749, 2.51605725604, 37.611770776],
    [0.00000004119, 1.72779509865, 28.5718080822],
    [0.00000004076, 6.00252170354, 145.1097790097],
    [0.00000004429, 5.65995321659, 98.8999885246],
    [0.0000000395, 2.74104636753, 350.3321196004],
    [0.00000004091, 1.61787956945, 39.0962434843],
    [0.00000004131, 4.40682554313, 37.1698277913],
    [0.0000000471, 3.50929350767, 38.6543004996],
    [0.0000000444, 4.78977105547, 38.084851528],
    [0.00000004433, 1.23386935925, 38.1812197476],
    [0.00000003762, 4.83940791709, 491.5579294568],
    [0.00000002606, 1.20956732792, 451.9404211107],
    [0.00000002537, 2.18628045751, 454.9093665273],
    [0.00000002328, 5.19779918719, 72.0732855816],
    [0.00000002502, 0.8598790435, 106.9767433719],
    [0.00000002342, 0.81387240947, 4.192785694],
    [0.00000001981, 0.46617960831, 184.7272873558],
    [0.00000001963, 6.01909114576, 44.070926471],
    [0.0000000218, 0.70099749844, 206.1855484372],
    [0.00000001811, 0.40456996647, 40.5807161926],
    [0.00000001814, 3.64699555185, 220.4126424388],
    [0.00000001705, 6.13551142362, 181.7583419392],
    [0.00000001855, 5.61635630213, 35.685355083],
    [0.00000001595, 2.97147156093, 37.8724032069],
    [0.00000001785, 2.42154818096, 388.4651552382],
    [0.00000001595, 3.05266110075, 38.3936680687],
    [0.00000001437, 1.48678704605, 135.5485514541],
    [0.00000001387, 2.46149266117, 138.5174968707],
    [0.00000001366, 1.52026779665, 68.8437077341],
    [0.00000001575, 3.58964541604, 38.0211610532],
    [0.00000001297, 5.06156596196, 33.9402499438],
    [0.00000001487, 0.20211121607, 30.0562807905],
    [0.00000001504, 5.80298577327, 46.2097904851],
    [0.00000001192, 0.87275514483, 42.3258213318],
    [0.00000001569, 2.43405967107, 38.2449102224],
    [0.00000001207, 1.84658687853, 251.4321310758],
    [0.00000001015, 0.53439848924, 129.9194771616],
    [0.00000000999, 2.47463873948, 312.1990839626],
    [0.0000000099, 3.41514319052, 144.1465711632],
    [0.00000000963, 4.31733242907, 151.0476698429],
    [0.0000000102, 0.98226686775, 143.6253063014],
    [0.00000000941, 1.02993053785, 221.3758502853],
    [0.00000000938, 2.43648356625, 567.8240007324],
    [0.00000001111, 0.65175024456, 146.594251718],
    [0.00000000777, 0.00175975222, 218.4069048687],
    [0.00000000895, 0.2512386962, 30.7106720963],
    [0.00000000795, 5.80519741659, 149.5631971346],
    [0.00000000737, 3.40060492866, 446.3113468182],
    [0.00000000719, 1.43795191278, 8.0767548473],
    [0.0000000072, 0.0065100755, 460.5384408198],
    [0.00000000766, 4.03399506246, 522.5774180938],
    [0.00000000666, 1.39457824982, 84.3428261229],
    [0.00000000584, 1.01405548136, 536.8045120954],
    [0.00000000596, 0.62390100715, 35.212274331],
    [0.00000000598, 5.39946724188, 41.0537969446],
    [0.00000000475, 5.80072248338, 7.4223635415],
    [0.0000000051, 1.3447857974, 258.0244132148],
    [0.00000000458, 5.25325523118, 80.7194894005],
    [0.00000000421, 3.24496387889, 416.7763308895],
    [0.00000000446, 1.19167306357, 180.2738692309],
    [0.00000000471, 0.92632922375, 44.7253177768],
    [0.00000000387, 1.68488418788, 183.2428146475],
    [0.00000000375, 0.15223869165, 255.0554677982],
    [0.00000000354, 4.21526988674, 0.9632078465],
    [0.00000000379, 2.16947487177, 105.4922706636],
    [0.00000000341, 4.7919405168, 110.2063212194],
    [0.00000000427, 5.15774894584, 31.5407534988],
    [0.00000000302, 3.4570630628, 100.3844612329],
    [0.00000000298, 2.26790695187, 639.897286314],
    [0.00000000279, 0.25689162963, 39.5056337615],
    [0.0000000032, 3.58085653166, 45.2465826386],
    [0.00000000269, 5.72024180826, 36.7604375141],
    [0.00000000247, 0.61040148804, 186.2117600641],
    [0.00000000245, 0.64173616273, 419.4846438752],
    [0.00000000235, 0.73189197665, 10213.285546211],
    [0.00000000232, 0.37399822852, 490.0734567485],
    [0.0000000023, 5.76570492457, 12.5301729722],
    [0.0000000024, 4.13447692727, 0.5212648618],
    [0.00000000279, 1.62614865256, 294.6729761443],
    [0.00000000238, 2.1852891655, 219.891377577],
    [0.00000000262, 3.08384135298, 6.592282139],
    [0.00000000217, 2.93214905312, 27.0873353739],
    [0.00000000217, 4.69210602828, 406.1031376411],
    [0.00000000219, 1.3521271256, 216.9224321604],
    [0.000000002, 2.35215465744, 605.9570363702],
    [0.00000000232, 3.92583619589, 1512.8068240082],
    [0.00000000223, 5.52392277606, 187.6962327724],
    [0.0000000019, 0.29169556516, 291.7040307277],
    [0.00000000236, 3.12464145036, 563.6312150384],
    [0.00000000193, 0.53675942386, 60.7669528868],
    [0.00000000215, 3.78391259001, 103.0927742186],
    [0.00000000172, 5.63262770743, 7.1135470008],
    [0.00000000164, 4.14700645532, 77.2292791221],
    [0.00000000162, 0.72021213236, 11.0457002639],
    [0.0000000016, 4.23490438166, 487.3651437628],
    [0.00000000191, 0.37651439206, 31.019488637],
    [0.00000000157, 1.02419759383, 6283.0758499914],
    [0.00000000157, 4.42530429545, 6206.8097787158],
    [0.00000000178, 6.24797160202, 316.3918696566],
    [0.00000000161, 5.65988283675, 343.2185725996],
    [0.00000000153, 5.58405022784, 252.0865223816],
    [0.00000000189, 4.8079103997, 641.1211265914],
    [0.00000000166, 5.50438043692, 662.531203563],
    [0.00000000146, 5.08949604858, 286.596221297],
    [0.00000000145, 2.13015521881, 2042.4977891028],
    [0.00000000156, 2.19452173251, 274.0660483248],
    [0.00000000148, 4.85696640135, 442.7517005706],
    [0.00000000187, 4.96121139073, 1589.0728952838],
    [0.00000000155, 2.28260574227, 142.1408335931],
    [0.00000000134, 1.29277093566, 456.3938392356],
    [0.00000000126, 5.59769497652, 179.3588454942],
    [0.00000000146, 2.53359213478, 256.5399405065],
    [0.0000000014, 1.57962199954, 75.7448064138],
    [0.00000000123, 0.05442220184, 944.9828232758],
    [0.00000000122, 1.90676379802, 418.2608035978],
    [0.00000000154, 1.86865302773, 331.3215390738],
    [0.00000000144, 5.52229258454, 14.0146456805],
    [0.00000000138, 2.80728175526, 82.8583534146],
    [0.00000000107, 0.66995358132, 190.665178189],
    [0.00000000114, 1.4889498028, 253.5709950899],
    [0.0000000011, 5.32587573069, 240.125798381],
    [0.00000000105, 0.65548440578, 173.6815870919],
    [0.00000000102, 2.58735617801, 450.4559484024],
    [0.00000000098, 0.44044795266, 328.3525936572],
    [0.00000000101, 4.71267656829, 117.36805233],
    [0.00000000094, 0.54938580474, 293.188503436],
    [0.00000000095, 2.17636214523, 101.8689339412],
    [0.00000000093, 0.63687810471, 377.1588225434],
    [0.00000000091, 5.84828809934, 10137.0194749354],
    [0.00000000089, 1.02830167997, 1021.2488945514],
    [0.00000000094, 1.79320597168, 493.0424021651],
    [0.0000000008, 1.58140274465, 69.1525242748],
    [0.00000000075, 0.23453373368, 63.7358983034],
    [0.00000000071, 1.5196198969, 488.5889840402],
];

const B1: &[Term] = &[
    [0.00227279214, 3.8079308987, 38.1330356378],
    [0.0000180312, 1.97576485377, 76.2660712756],
    [0.00001385733, 4.82555548018, 36.6485629295],
    [0.000014333, PI, 0.0],
    [0.00001073298, 6.08054240712, 39.6175083461],
    [0.00000147903, 3.85766231348, 74.7815985673],
    [0.00000136448, 0.47764957338, 1.4844727083],
    [0.00000070285, 6.18782052139, 35.1640902212],
    [0.00000051899, 5.05221791891, 73.297125859],
    [0.00000037273, 4.89476629246, 41.1019810544],
    [0.00000042568, 0.30721737205, 114.3991069134],
    [0.00000037104, 5.75999349109, 2.9689454166],
    [0.00000026399, 5.21566335936, 213.299095438],
    [0.00000016949, 4.26463671859, 77.7505439839],
    [0.00000018747, 0.90426522185, 453.424893819],
    [0.00000012951, 6.17709713139, 529.6909650946],
    [0.00000010502, 1.20336443465, 137.0330241624],
    [0.00000004416, 1.25478204684, 111.4301614968],
    [0.00000004383, 6.14147099615, 71.8126531507],
    [0.00000003694, 0.94837702528, 33.6796175129],
    [0.00000002957, 4.7753287121, 4.4534181249],
    [0.00000002698, 1.92435531119, 112.9146342051],
    [0.00000001989, 3.96637567224, 42.5864537627],
    [0.0000000115, 4.30568700024, 37.611770776],
    [0.00000000871, 4.81775882249, 152.5321425512],
    [0.00000000944, 2.2177777205, 109.9456887885],
    [0.00000000936, 1.1705498394, 148.0787244263],
    [0.00000000925, 2.40329074, 206.1855484372],
    [0.0000000069, 1.57381082857, 38.6543004996],
    [0.00000000624, 2.79466003645, 79.2350166922],
    [0.00000000726, 4.13829519132, 28.5718080822],
    [0.0000000064, 2.46161252327, 115.8835796217],
    [0.00000000531, 2.969915305, 98.8999885246],
    [0.00000000537, 1.95986772922, 220.4126424388],
    [0.00000000539, 2.06690307827, 40.5807161926],
    [0.00000000716, 0.5578184701, 350.3321196004],
    [0.00000000563, 1.84072805158, 983.1158589136],
    [0.00000000533, 1.3478767794, 47.6942631934],
    [0.00000000566, 1.80111775954, 175.1660598002],
    [0.00000000449, 1.62191691011, 144.1465711632],
    [0.00000000371, 2.74239666472, 415.2918581812],
    [0.00000000381, 6.11910193382, 426.598190876],
    [0.00000000366, 2.3975258536, 129.9194771616],
    [0.00000000456, 3.19611413854, 108.4612160802],
    [0.00000000327, 3.62341506247, 38.1812197476],
    [0.00000000328, 0.89613145346, 38.084851528],
    [0.00000000341, 3.8726546907, 35.685355083],
    [0.00000000331, 4.48858774501, 460.5384408198],
    [0.00000000414, 1.03543720726, 70.3281804424],
    [0.0000000031, 0.51297445145, 37.1698277913],
    [0.00000000287, 2.183516518, 491.5579294568],
    [0.00000000274, 6.11504724934, 522.5774180938],
    [0.00000000281, 3.81657117512, 5.9378908332],
    [0.00000000298, 4.00532631258, 39.0962434843],
    [0.00000000265, 5.26569823181, 446.3113468182],
    [0.00000000319, 1.34097217817, 184.7272873558],
    [0.00000000203, 6.02944475303, 149.5631971346],
    [0.00000000205, 5.5393573202, 536.8045120954],
    [0.00000000226, 6.17710997862, 454.9093665273],
    [0.00000000186, 3.24302117645, 4.192785694],
    [0.00000000179, 4.91458426239, 451.9404211107],
    [0.00000000198, 2.3077585288, 146.594251718],
    [0.00000000166, 1.16793600058, 72.0732855816],
    [0.00000000147, 2.10574339673, 44.070926471],
    [0.00000000123, 1.98250467171, 46.2097904851],
    [0.00000000159, 3.46955908364, 145.1097790097],
    [0.00000000116, 5.8897111359, 38.0211610532],
    [0.00000000115, 4.73412534395, 38.2449102224],
    [0.00000000125, 3.42713474801, 251.4321310758],
    [0.00000000128, 1.51108932026, 221.3758502853],
    [0.00000000127, 0.17176461812, 138.5174968707],
    [0.00000000124, 5.85160407534, 1059.3819301892],
    [0.00000000091, 2.38273591235, 30.0562807905],
    [0.00000000118, 5.27114846878, 37.8724032069],
    [0.00000000117, 5.35267669439, 38.3936680687],
    [0.00000000099, 5.19920708255, 135.5485514541],
    [0.00000000114, 4.37452353441, 388.4651552382],
    [0.00000000093, 4.64183693718, 106.9767433719],
    [0.00000000084, 1.35269684746, 33.9402499438],
    [0.00000000111, 3.5622646377, 181.7583419392],
    [0.00000000082, 3.18401661435, 42.3258213318],
    [0.00000000084, 5.51669920239, 8.0767548473],
];

const B2: &[Term] = &[
    [0.00009690766, 5.57123750291, 38.1330356378],
    [0.00000078815, 3.62705474219, 76.2660712756],
    [0.00000071523, 0.4547668858, 36.6485629295],
    [0.00000058646, PI, 0.0],
    [0.00000029915, 1.60671721861, 39.6175083461],
    [0.00000006472, 5.60736756575, 74.7815985673],
    [0.000000058, 2.25341847151, 1.4844727083],
    [0.00000004309, 1.68126737666, 35.1640902212],
    [0.00000003502, 2.39142672984, 114.3991069134],
    [0.00000002649, 0.65061457644, 73.297125859],
    [0.00000001518, 0.37600329684, 213.299095438],
    [0.00000001223, 1.2311604303, 2.9689454166],
    [0.00000000766, 5.45279753249, 453.424893819],
    [0.00000000779, 2.07081431472, 529.6909650946],
    [0.00000000496, 0.26552533921, 41.1019810544],
    [0.00000000469, 5.87866293959, 77.7505439839],
    [0.00000000482, 5.63056237954, 137.0330241624],
    [0.00000000345, 1.80085651594, 71.8126531507],
    [0.00000000274, 2.86650141006, 33.6796175129],
    [0.00000000158, 4.63868656467, 206.1855484372],
    [0.00000000166, 1.24877330835, 220.4126424388],
    [0.00000000153, 2.87376446497, 111.4301614968],
    [0.00000000116, 3.63838544843, 112.9146342051],
    [0.00000000085, 0.43712705655, 4.4534181249],
    [0.00000000104, 6.12597614674, 144.1465711632],
];

const B3: &[Term] = &[
    [0.00000273423, 1.01688979072, 38.1330356378],
    [0.00000002274, 2.36805657126, 36.6485629295],
    [0.00000002029, 5.33364321342, 76.2660712756],
    [0.00000002393, 0.0, 0.0],
    [0.00000000538, 3.21934211365, 39.6175083461],
    [0.00000000242, 4.52650721578, 114.3991069134],
    [0.00000000185, 1.04913770083, 74.7815985673],
    [0.00000000155, 3.62376309338, 35.1640902212],
    [0.00000000157, 3.9419536961, 1.4844727083],
];

const B4: &[Term] = &[
    [0.00000005728, 2.66872693322, 38.1330356378],
];

const B5: &[Term] = &[
    [0.00000000113, 4.70646877989, 38.1330356378],
];

const R0: &[Term] = &[
    [30.07013206102, 0.0, 0.0],
    [0.2706225949, 1.3299945893, 38.1330356378],
    [0.01691764281, 3.25186138896, 36.6485629295],
    [0.00807830737, 5.18592836167, 1.4844727083],
    [0.00537760613, 4.52113902845, 35.1640902212],
    [0.00495725642, 1.57105654815, 491.5579294568],
    [0.0027457197, 1.84552256801, 175.1660598002],
    [0.00135134095, 3.37220607384, 39.6175083461],
    [0.00121801825, 5.79754444303, 76.2660712756],
    [0.00100895397, 0.37702748681, 73.297125859],
    [0.00069791722, 3.79617226928, 2.9689454166],
    [0.00046687838, 5.74937810094, 33.6796175129],
    [0.00024593778, 0.50801728204, 109.9456887885],
    [0.00016939242, 1.59422166991, 71.8126531507],
    [0.00014229686, 1.07786112902, 74.7815985673],
    [0.00012011825, 1.92062131635, 1021.2488945514],
    [0.00008394731, 0.67816895547, 146.594251718],
    [0.000075718, 1.07149263431, 388.4651552382],
    [0.00005720852, 2.59059512267, 4.4534181249],
    [0.00004839672, 1.9068599107, 41.1019810544],
    [0.00004483492, 2.90573457534, 529.6909650946],
    [0.00004270202, 3.41343865825, 453.424893819],
    [0.0000435379, 0.6798566237, 32.1951448046],
    [0.00004420804, 1.74993796503, 108.4612160802],
    [0.00002881063, 1.98600105123, 137.0330241624],
    [0.00002635535, 3.09755943422, 213.299095438],
    [0.0000338093, 0.84810683275, 183.2428146475],
    [0.00002878942, 3.67415901855, 350.3321196004],
    [0.00002306293, 2.80962935724, 70.3281804424],
    [0.00002530149, 5.79839567009, 490.0734567485],
    [0.00002523132, 0.48630800015, 493.0424021651],
    [0.00002087303, 0.61858378281, 33.9402499438],
    [0.00001976522, 5.1170304456, 168.0525127994],
    [0.00001905254, 1.72186472126, 182.279606801],
    [0.00001654039, 1.92782545887, 145.1097790097],
    [0.00001435072, 1.70005157785, 484.444382456],
    [0.00001403029, 4.58914203187, 498.6714764576],
    [0.00001499193, 1.01623299513, 219.891377577],
    [0.0000139886, 0.7622031762, 176.6505325085],
    [0.00001403377, 6.07659416908, 173.6815870919],
    [0.0000112856, 5.96661179805, 9.5612275556],
    [0.00001228304, 1.59881465324, 77.7505439839],
    [0.00000835414, 3.97066884218, 114.3991069134],
    [0.00000811186, 3.0025888087, 46.2097904851],
    [0.00000731925, 2.10447054189, 181.7583419392],
    [0.00000615781, 2.97874625677, 106.9767433719],
    [0.00000704778, 1.1873821088, 256.5399405065],
    [0.0000050204, 1.38657803368, 5.9378908332],
    [0.00000530357, 4.24059166485, 111.4301614968],
    [0.00000437096, 2.27029212923, 1550.939859646],
    [0.0000040025, 1.25609325435, 8.0767548473],
    [0.00000421011, 1.89084929506, 30.7106720963],
    [0.00000382457, 3.29965259685, 983.1158589136],
    [0.00000422485, 5.53186169605, 525.4981794006],
    [0.00000355389, 2.27847846648, 218.4069048687],
    [0.00000280062, 1.54129714238, 98.8999885246],
    [0.00000314499, 3.95932948594, 381.3516082374],
    [0.00000280556, 4.54238271682, 44.7253177768],
    [0.00000267738, 5.13323364247, 112.9146342051],
    [0.00000333311, 5.75067616021, 39.0962434843],
    [0.00000291625, 4.02398326341, 68.8437077341],
    [0.00000321429, 1.50625025822, 454.9093665273],
    [0.00000309196, 2.85452752153, 72.0732855816],
    [0.00000345094, 1.35905860594, 293.188503436],
    [0.00000307439, 0.31964571332, 601.7642506762],
    [0.00000251356, 3.53992782846, 312.1990839626],
    [0.00000248152, 3.41078346726, 37.611770776],
    [0.00000306, 2.72475094464, 6244.9428143536],
    [0.00000293532, 4.89079857814, 528.2064923863],
    [0.00000234479, 0.59231043427, 42.5864537627],
    [0.00000239628, 3.16441455173, 143.6253063014],
    [0.00000214523, 3.6248028304, 278.2588340188],
    [0.00000246198, 1.01506302015, 141.2258098564],
    [0.00000174089, 5.55011789988, 567.8240007324],
    [0.00000163934, 2.10166491786, 2.4476805548],
    [0.00000162897, 2.48946521653, 4.192785694],
    [0.00000193455, 1.5842528758, 138.5174968707],
    [0.00000155323, 3.28425127954, 31.019488637],
    [0.00000182469, 2.45244890571, 255.0554677982],
    [0.00000177846, 4.14773474853, 10175.1525105732],
    [0.00000174413, 1.53042999914, 329.8370663655],
    [0.00000137649, 3.34900537767, 0.9632078465],
    [0.00000161011, 5.16655038482, 211.8146227297],
    [0.00000113473, 4.96286007991, 148.0787244263],
    [0.00000128823, 3.25521535448, 24.1183899573],
    [0.00000107363, 3.26457701792, 1059.3819301892],
    [0.00000122732, 5.39399536941, 62.2514255951],
    [0.00000120529, 3.08050145518, 184.7272873558],
    [0.00000099356, 1.92888554099, 28.5718080822],
    [0.00000097713, 2.59474415429, 6.592282139],
    [0.00000124095, 3.1151675034, 221.3758502853],
    [0.00000124693, 2.97042405451, 251.4321310758],
    [0.00000114252, 0.25039919123, 594.6507036754],
    [0.00000111006, 3.34276426767, 180.2738692309],
    [0.00000120939, 1.92914010593, 25.6028626656],
    [0.00000104667, 0.94883561775, 395.578702239],
    [0.00000109779, 5.43147520571, 494.5268748734],
    [0.00000096919, 0.86184760695, 1014.1353475506],
    [0.00000098685, 0.8957795271, 488.5889840402],
    [0.00000088968, 4.78109764779, 144.1465711632],
    [0.00000107888, 0.98700578434, 1124.34166877],
    [0.00000097067, 2.62667400276, 291.7040307277],
    [0.00000075131, 5.88936524779, 43.2408450685],
    [0.00000093718, 6.09873565184, 526.722019678],
    [0.00000094822, 0.2066294394, 456.3938392356],
    [0.00000070036, 2.39683345663, 426.598190876],
    [0.00000077187, 4.2107675324, 105.4922706636],
    [0.00000089874, 3.25100749923, 258.0244132148],
    [0.00000069133, 4.93031154435, 1028.3624415522],
    [0.00000090657, 1.69466970587, 366.485629295],
    [0.00000074242, 3.14479101276, 82.8583534146],
    [0.00000057995, 0.86159785905, 60.7669528868],
    [0.00000078695, 1.0930757555, 700.6642392008],
    [0.0000005723, 0.81331949225, 2.9207613068],
    [0.00000063443, 4.39590123005, 149.5631971346],
    [0.00000055698, 3.89047249911, 47.6942631934],
    [0.0000005643, 5.15003563302, 0.5212648618],
    [0.00000056174, 5.42986960794, 911.042573332],
    [0.00000061746, 6.16453667559, 1019.7644218431],
    [0.00000070503, 0.08077330612, 40.5807161926],
    [0.00000074677, 4.8590449998, 186.2117600641],
    [0.00000061861, 4.78702599861, 11.0457002639],
    [0.00000061135, 0.83712253227, 1022.7333672597],
    [0.00000061268, 5.70228826765, 178.1350052168],
    [0.00000052887, 0.37458943972, 27.0873353739],
    [0.00000056722, 3.52318112447, 216.9224321604],
    [0.00000048819, 5.10789123481, 64.9597385808],
    [0.0000006329, 4.3942491003, 807.9497991134],
    [0.00000064062, 6.28297531806, 7.1135470008],
    [0.00000046356, 1.34735469284, 451.9404211107],
    [0.0000006054, 3.40316162416, 294.6729761443],
    [0.000000469, 0.17048203552, 7.4223635415],
    [0.00000056766, 0.45048868231, 140.001969579],
    [0.00000055887, 1.06815733757, 172.1971143836],
    [0.00000053761, 2.79644687008, 328.3525936572],
    [0.00000043828, 6.04655696644, 135.5485514541],
    [0.00000049549, 0.64106656292, 41.0537969446],
    [0.0000005396, 2.91774494436, 563.6312150384],
    [0.00000042961, 5.40175361431, 487.3651437628],
    [0.00000051508, 0.09105540708, 210.3301500214],
    [0.00000041889, 3.12343223889, 29.226199388],
    [0.00000047655, 3.90701760087, 63.7358983034],
    [0.00000041639, 6.26847783513, 32.7164096664],
    [0.00000041429, 4.45464156759, 37.1698277913],
    [0.00000040745, 0.16043648294, 79.2350166922],
    [0.00000048205, 1.8419837301, 403.1341922245],
    [0.00000036912, 0.44771386183, 30.0562807905],
    [0.00000047762, 0.88083849566, 3302.479391062],
    [0.00000039465, 3.50565484069, 357.4456666012],
    [0.00000042139, 0.63375113663, 343.2185725996],
    [0.00000041275, 1.36370496322, 31.2319369581],
    [0.00000042612, 3.55270845713, 38.6543004996],
    [0.00000038931, 5.2669175327, 415.2918581812],
    [0.00000038967, 5.25866056502, 386.9806825299],
    [0.00000033734, 5.24400184426, 67.3592350258],
    [0.00000040879, 3.55292279438, 331.3215390738],
    [0.00000038768, 1.12288359393, 38.1812197476],
    [0.000000375, 6.08687972441, 35.4247226521],
    [0.00000038831, 4.67876780698, 38.084851528],
    [0.00000038231, 6.26491054328, 389.9496279465],
    [0.00000029976, 4.45759985804, 22.633917249],
    [0.00000031356, 0.07746010366, 12.5301729722],
    [0.00000026341, 4.59559782754, 106.0135355254],
    [0.00000027465, 5.9954158789, 206.1855484372],
    [0.00000025152, 4.4986776032, 34.2008823747],
    [0.00000024122, 5.17089441917, 129.9194771616],
    [0.00000028997, 3.6492721021, 253.5709950899],
    [0.00000027173, 4.37944546475, 142.1408335931],
    [0.00000030634, 1.5934880656, 348.8476468921],
    [0.00000031464, 1.05065113524, 100.3844612329],
    [0.00000024056, 1.02801635413, 41.7563723602],
    [0.00000022632, 4.72511111292, 81.3738807063],
    [0.00000021942, 3.48416607882, 69.1525242748],
    [0.00000026333, 3.01556008632, 365.0011565867],
    [0.00000022355, 3.92220883921, 5.1078094307],
    [0.00000022498, 4.03487494425, 19.1224551112],
    [0.00000022885, 1.58977064672, 189.3931538018],
    [0.0000002652, 3.61427038042, 367.9701020033],
    [0.00000025496, 2.43810518614, 351.8165923087],
    [0.00000019111, 2.59694457001, 2080.6308247406],
    [0.0000001964, 6.15701741238, 35.212274331],
    [0.00000025688, 2.00512719767, 439.782755154],
    [0.00000021613, 3.32354204724, 119.5069163441],
    [0.00000025389, 4.74025836522, 1474.6737883704],
    [0.00000018107, 5.35129342595, 244.318584075],
    [0.00000023295, 5.93767742799, 316.3918696566],
    [0.00000022087, 4.81594755148, 84.3428261229],
    [0.00000016972, 3.0510514994, 220.4126424388],
    [0.00000020022, 4.99276451168, 179.0982130633],
    [0.0000002037, 1.86508317889, 171.2339065371],
    [0.00000019426, 2.04829970231, 5.4166259714],
    [0.00000022628, 0.27205783433, 666.723989257],
    [0.00000019072, 3.70882976684, 164.1203595363],
    [0.00000017969, 3.40425338171, 69.3649725959],
    [0.00000018716, 0.90215956591, 285.3723810196],
    [0.00000015889, 0.42011285882, 697.743477894],
    [0.00000014988, 3.08544843665, 704.8570248948],
    [0.00000014774, 3.36129613309, 274.0660483248],
    [0.00000015972, 1.82864185268, 477.3308354552],
    [0.00000013892, 2.94161501165, 38.3936680687],
    [0.00000013922, 2.85574364078, 37.8724032069],
    [0.00000015481, 4.94982954853, 101.8689339412],
    [0.00000017571, 5.82317632469, 35.685355083],
    [0.00000015856, 5.04973561582, 36.9091953604],
    [0.00000016414, 3.63049397028, 45.2465826386],
    [0.00000017158, 2.51251149482, 20.6069278195],
    [0.00000012941, 3.03041555329, 522.5774180938],
    [0.00000015752, 5.00292909214, 247.2393453818],
    [0.00000012679, 0.20331109568, 460.5384408198],
    [0.0000001626, 5.93480347217, 815.0633461142],
    [0.00000012903, 3.51141502996, 446.3113468182],
    [0.00000013891, 5.5106469767, 31.5407534988],
    [0.00000013668, 5.4557613532, 39.3568759152],
    [0.00000013418, 3.95805150079, 290.2195580194],
    [0.00000015368, 2.45783892707, 26.826702943],
    [0.00000014246, 3.18588280921, 401.6497195162],
    [0.00000012222, 4.94370170146, 14.0146456805],
    [0.00000015484, 3.79703715637, 404.6186649328],
    [0.00000013427, 3.79527836573, 151.0476698429],
    [0.0000001445, 4.93940408761, 120.9913890524],
    [0.00000014331, 4.71117327722, 738.7972748386],
    [0.00000011566, 5.91003539239, 536.8045120954],
    [0.00000015578, 2.91836788254, 875.830299001],
    [0.00000013124, 2.16056013419, 152.5321425512],
    [0.00000011744, 2.94770244071, 2.7083129857],
    [0.00000012793, 1.97868575679, 1.3725981237],
    [0.00000012969, 0.00535826017, 97.4155158163],
    [0.00000013891, 4.7643544182, 0.2606324309],
    [0.00000013729, 2.3230647385, 38.2449102224],
    [0.00000010714, 6.18129683877, 115.8835796217],
    [0.0000001161, 4.61712859898, 178.7893965226],
    [0.00000011257, 0.79300245838, 42.3258213318],
    [0.000000145, 5.44690193314, 44.070926471],
    [0.00000011534, 5.26580538005, 160.9389657986],
    [0.00000013355, 5.20849186729, 32.4557772355],
    [0.00000013658, 2.15687632802, 476.4313180835],
    [0.00000013782, 3.47865209163, 38.0211610532],
    [0.00000012714, 2.09462988855, 20.4950532349],
    [0.00000013257, 5.15138524813, 103.0927742186],
    [0.00000009715, 0.7459788348, 918.1561203328],
    [0.0000001034, 5.38977407079, 222.8603229936],
    [0.00000013357, 5.89635739027, 748.0978699633],
    [0.00000012632, 1.20306997433, 16.1535096946],
    [0.00000011437, 1.58444114292, 495.4900827199],
    [0.00000011424, 4.74142930795, 487.6257761937],
    [0.00000009098, 5.19932138822, 118.0224436358],
    [0.00000009336, 0.97313630925, 662.531203563],
    [0.00000009827, 4.48170250645, 505.7850234584],
    [0.00000008585, 0.20375451897, 944.9828232758],
    [0.00000008875, 5.53111742265, 17.5261078183],
    [0.00000009957, 4.03258125243, 169.5369855077],
    [0.00000011506, 3.11649121817, 17.6379824029],
    [0.00000009818, 5.20376439002, 1.5963472929],
    [0.0000001016, 3.74441320429, 457.617679513],
    [0.00000008661, 0.31247523804, 1440.7335384266],
    [0.00000008496, 1.06445636872, 55.7710180407],
    [0.00000011162, 1.92907800408, 564.8550553158],
    [0.00000008057, 0.31116345866, 377.4194549743],
    [0.00000009851, 4.23328578127, 418.2608035978],
    [0.00000007938, 2.40417397694, 488.3765357191],
    [0.00000009894, 0.63707319139, 183.7640795093],
    [0.00000009913, 3.94049519088, 441.2672278623],
    [0.00000007867, 3.87469522964, 494.7393231945],
    [0.00000007589, 3.15909316566, 416.7763308895],
    [0.00000008496, 5.38968698704, 104.0077979553],
    [0.00000009716, 3.06038536864, 166.5680400911],
    [0.00000009377, 0.56416645296, 673.316271396],
    [0.00000008771, 5.24534141981, 1057.8974574809],
    [0.0000000799, 1.55726966638, 59.2824801785],
    [0.0000000909, 4.32953439022, 29.7474642498],
    [0.00000009667, 5.89033222679, 358.4088744477],
    [0.00000007209, 2.29464803358, 79.1868325824],
    [0.00000008062, 0.44458003524, 19.0105805266],
    [0.00000008254, 3.47304582051, 156.1554792736],
    [0.00000009804, 6.06393995615, 784.7464328928],
    [0.00000008516, 5.99060386955, 180.7951340927],
    [0.0000000809, 1.38588221442, 1654.0326338646],
    [0.00000009074, 4.0397149046, 1017.0561088574],
    [0.00000006908, 1.41919832926, 178.3474535379],
    [0.0000000823, 2.53750470473, 518.3846323998],
    [0.00000008594, 5.29104206063, 457.8783119439],
    [0.00000006769, 5.43380191356, 171.9846660625],
    [0.00000008571, 0.35876828441, 636.6677084665],
    [0.00000008995, 1.36992508507, 6209.7787241324],
    [0.00000006641, 2.92327140872, 0.0481841098],
    [0.00000009278, 3.80308677009, 25558.2121764796],
    [0.00000006567, 4.01934954352, 0.1118745846],
    [0.00000006441, 4.28250687347, 36.1272980677],
    [0.00000007257, 4.09776235307, 326.8681209489],
    [0.00000008384, 5.49363770202, 532.6117264014],
    [0.00000007471, 4.62144262894, 526.9826521089],
    [0.000000075, 0.61545750834, 485.9288551643],
    [0.00000007716, 1.04880632264, 525.2375469697],
    [0.00000008504, 2.79350586429, 10139.988420352],
    [0.00000007466, 5.07942174095, 157.6399519819],
    [0.00000007186, 6.22833818429, 77.2292791221],
    [0.00000007784, 1.89308880453, 984.6003316219],
    [0.00000006513, 0.07498932215, 79.889407998],
    [0.00000006077, 2.96673519667, 36.6967470393],
    [0.00000007706, 5.7063258079, 209.106309744],
    [0.00000007265, 4.94483532589, 131.4039498699],
    [0.00000006984, 2.53239305821, 497.1870037493],
    [0.00000007824, 2.31462643851, 513.079881013],
    [0.00000007175, 3.69203633127, 524.0137066923],
    [0.00000006855, 0.14076801572, 283.6272758804],
    [0.00000006922, 3.36515011915, 438.2982824457],
    [0.00000007349, 3.50406958122, 500.1559491659],
    [0.00000006301, 0.14776691217, 608.877797677],
    [0.00000005892, 4.24403528888, 4.665866446],
    [0.00000007613, 5.14905171677, 259.5088859231],
    [0.00000007128, 5.92696788834, 482.9599097477],
    [0.00000006829, 1.01745137848, 1543.8263126452],
    [0.00000005981, 4.79954091087, 215.4379594521],
    [0.00000005526, 2.34003154732, 65.2203710117],
    [0.00000006817, 6.1216282969, 395.0574373772],
    [0.00000005369, 3.76855960849, 52099.5402118728],
    [0.00000005776, 5.61434462641, 987.5692770385],
    [0.00000007523, 5.60432148128, 2810.9214616052],
    [0.00000007329, 3.76815551582, 1512.8068240082],
    [0.00000005616, 2.13872867116, 145.6310438715],
    [0.00000005258, 0.3085083691, 36.6003788197],
    [0.00000005688, 1.82274388581, 1227.4344429886],
    [0.00000005658, 2.35049199704, 5.6290742925],
    [0.00000006135, 4.23390561816, 496.0113475817],
    [0.00000005128, 2.89050864873, 313.6835566709],
    [0.00000006472, 3.49494191669, 552.6973893591],
    [0.00000004983, 3.91958511552, 10135.5350022271],
    [0.00000005217, 0.40052635702, 319.3126309634],
    [0.00000004952, 1.42482088612, 49.1787359017],
    [0.00000005964, 5.70758449643, 309.7995875176],
    [0.00000005091, 6.00974510144, 1409.7140497896],
    [0.00000005205, 5.5027133451, 238.9019581036],
    [0.000000048, 1.1345031067, 134.0640787458],
    [0.00000004943, 1.43051344597, 422.405405182],
    [0.00000005604, 2.05669305961, 207.3612046048],
    [0.0000000631, 5.22966882627, 139.7413371481],
    [0.00000004772, 3.06668713747, 464.7312265138],
    [0.00000004919, 3.57280542629, 52175.8062831484],
    [0.00000004762, 5.90654311203, 838.9692877504],
    [0.00000004848, 0.77467099227, 1.6969210294],
    [0.00000005694, 0.77313415569, 709.9648343255],
    [0.00000005455, 0.90289242792, 208.8456773131],
    [0.00000004901, 3.79986913631, 15.4991183888],
    [0.00000004772, 0.15755140037, 39.5056337615],
    [0.00000005673, 2.68359159067, 1127.2624300768],
    [0.00000005477, 0.53123497431, 113.8778420516],
    [0.00000005077, 1.59268428609, 1547.9709142294],
    [0.00000004981, 1.44584050478, 1.2720243872],
    [0.00000005813, 5.85024085408, 57.255490749],
    [0.0000000552, 5.06396698257, 421.2297490144],
    [0.00000005938, 0.96886308551, 6280.1069045748],
    [0.00000005206, 3.5800381937, 474.9468453752],
    [0.00000005256, 0.61005270999, 95.9792272178],
    [0.00000005531, 5.28764137194, 36.7604375141],
    [0.00000006158, 5.73176703797, 711.4493070338],
    [0.00000005003, 2.19048397989, 501.6404218742],
    [0.0000000515, 5.58407480282, 26049.7701059364],
    [0.00000005138, 4.55234158942, 670.916774951],
    [0.00000005609, 4.3727275978, 52.8020726241],
    [0.00000005636, 2.39183054397, 10210.3166007944],
    [0.00000004512, 2.59978208967, 1234.5479899894],
    [0.00000005412, 4.58813638089, 179.6194779251],
    [0.00000004314, 3.38846714337, 142.6620984549],
    [0.00000004708, 5.23537414423, 3.6233367224],
    [0.00000004471, 3.94378336812, 12566.1516999828],
    [0.00000005296, 1.12249063176, 134.1122628556],
    [0.00000004188, 2.52490407427, 6205.3253060075],
    [0.00000004645, 1.90644271528, 13324.3166711614],
    [0.00000004502, 2.01956920977, 315.1680293792],
    [0.00000005346, 2.94804816223, 353.0404325861],
    [0.00000004177, 2.09489065926, 803.7570134194],
    [0.00000005296, 3.88249567974, 2118.7638603784],
    [0.00000005325, 4.28221258353, 477.9157907918],
    [0.00000005519, 0.09960891963, 600.019145537],
    [0.00000005169, 0.59948596687, 6.9010986797],
    [0.00000004179, 0.14619703083, 6644.5762904701],
    [0.0000000449, 1.07042724999, 52139.15772021889],
    [0.0000000397, 6.13227798578, 1553.9088050626],
    [0.0000000397, 4.69887237362, 91.7864415238],
    [0.00000004234, 0.14478458924, 65.8747623175],
    [0.00000005183, 3.52837189306, 110.2063212194],
    [0.00000005259, 6.20809827528, 142.7102825647],
    [0.00000003869, 5.25125030487, 1558.0534066468],
    [0.00000004457, 2.10248126544, 487.1045113319],
    [0.0000000489, 1.83606790269, 46.5186070258],
    [0.00000003875, 5.60269278935, 385.4962098216],
    [0.00000003826, 1.30946706974, 2176.6100519584],
    [0.00000004591, 4.84657580441, 1337.640764208],
    [0.00000005111, 1.18808079775, 981.6313862053],
    [0.00000004709, 1.40878215308, 52213.9393187862],
    [0.00000003891, 5.43661875415, 154.6710065653],
    [0.00000004145, 4.32505910718, 363.5166838784],
    [0.00000004441, 3.5015842457, 187.6962327724],
    [0.00000003703, 2.48768949613, 67.8804998876],
    [0.00000004094, 1.4234704726, 310.7146112543],
    [0.00000003681, 5.70552661143, 491.6698040414],
    [0.00000004787, 3.65822147476, 589.3459522886],
    [0.0000000402, 5.45643059988, 6641.6073450535],
    [0.00000003656, 0.57790726599, 491.4460548722],
    [0.00000004288, 3.35265955957, 203.2166030206],
    [0.00000003843, 4.61508898119, 1025.7023126763],
    [0.00000003767, 0.05292047125, 320.2758388099],
    [0.00000004632, 0.82011276589, 3265.8308281325],
    [0.00000004609, 5.25443775917, 296.1574488526],
    [0.00000004555, 5.30391170376, 26013.1215430069],
    [0.00000003556, 4.80267245336, 224.3447957019],
    [0.00000004859, 5.52756242256, 487.4133278726],
    [0.00000003626, 1.44624342082, 70.8494453042],
    [0.00000004302, 1.60914544159, 12529.5031370533],
    [0.00000003493, 4.75315651083, 12489.8856287072],
    [0.00000003722, 0.27433061822, 949.4362414007],
    [0.00000004234, 5.25112033465, 194.2885149114],
    [0.00000003451, 2.97409317928, 499.6346843041],
    [0.00000004796, 6.21059766333, 491.8185618877],
    [0.00000003639, 1.25605018211, 2603.2082428344],
    [0.00000004646, 5.71392540144, 321.7603115182],
    [0.00000003702, 2.08952561657, 491.036664595],
    [0.00000003672, 2.87489628704, 497.49582029],
    [0.00000003965, 1.0548498824, 75.7448064138],
    [0.00000003416, 0.68584132933, 305.0855369618],
    [0.00000004513, 4.3892700249, 425.1137181677],
    [0.00000003853, 0.61321572401, 12526.5341916367],
    [0.00000003788, 3.3222199584, 3140.0127549298],
    [0.00000003781, 5.58125317044, 1652.5481611563],
    [0.00000003903, 5.31609723466, 408.1783111804],
    [0.00000003945, 3.60558877407, 1589.0728952838],
    [0.00000004084, 0.83813879869, 52.3601296394],
    [0.00000004084, 3.50290269471, 23.9059416362],
    [0.00000003694, 1.03218855688, 481.4754370394],
    [0.00000003636, 5.31068934607, 141.4864422873],
    [0.00000003345, 3.94392179077, 20389.92252949249],
    [0.00000004639, 6.24618220184, 821.3949958223],
    [0.00000003934, 0.26992234338, 1655.5171065729],
    [0.00000004431, 2.486474378, 549.7284439425],
    [0.00000004168, 5.39993754642, 236.5024616586],
    [0.0000000402, 0.07393243012, 52136.18877480229],
    [0.00000004055, 1.34004288978, 1054.9285120643],
    [0.00000003275, 0.98533127454, 1344.7543112088],
    [0.00000003213, 2.97105590703, 20386.95358407589],
    [0.00000004428, 0.06728869735, 491.2972970259],
    [0.00000004063, 0.0619283857, 6168.676743078],
    [0.00000003804, 5.34897033476, 523.7530742614],
    [0.00000003917, 5.67905809516, 1131.1945833399],
    [0.00000003833, 0.87811168267, 52.6901980395],
    [0.0000000402, 2.69209723289, 1439.4615140394],
    [0.00000004373, 1.86209663434, 73.5577582899],
    [0.00000003159, 1.04693380342, 703.3725521865],
    [0.00000003116, 5.2015916684, 449.232108125],
    [0.00000003258, 4.65131076542, 696.2590051857],
    [0.00000003427, 0.27003884843, 2389.9091473964],
    [0.00000004349, 0.07531141761, 20426.571092422],
    [0.00000003383, 5.61838426864, 699.2279506023],
    [0.00000003305, 1.4166687729, 562.1467423301],
    [0.00000003297, 5.46677712589, 1442.2180111349],
    [0.00000003277, 2.71815883511, 980.146913497],
    [0.00000003171, 4.49510885866, 1439.2490657183],
    [0.00000004175, 4.24327707038, 381.6122406683],
    [0.00000003155, 3.40776789576, 39.7293829307],
    [0.00000004112, 0.90309319273, 1087.6931058405],
    [0.0000000335, 5.27474671017, 80.7194894005],
    [0.00000003725, 1.52448613082, 1058.109905802],
    [0.0000000365, 3.59798316565, 192.8040422031],
    [0.00000003837, 1.48519528444, 10098.8864392976],
    [0.00000002959, 1.23012121982, 2500.1154686158],
    [0.0000000333, 6.12470287875, 10172.1835651566],
    [0.00000003361, 4.31837298696, 492.0791943186],
    [0.00000003288, 3.14692435376, 347.3631741838],
    [0.00000002992, 5.01304660316, 175.21424391],
    [0.00000003294, 2.52694043155, 1692.1656695024],
    [0.00000002984, 1.8178065989, 175.1178756904],
    [0.00000003013, 0.92957285991, 1515.7757694248],
    [0.00000003863, 5.4604492857, 332.8060117821],
    [0.00000003403, 1.10932483984, 987.3086446076],
    [0.00000003312, 0.67710158807, 977.4867846211],
    [0.0000000303, 1.77996261146, 156489.2858138074],
    [0.00000003605, 4.89955108152, 1043.8828118004],
    [0.00000002937, 0.6046967123, 990.2294059144],
    [0.00000003276, 4.26765608367, 1189.3014073508],
    [0.00000002966, 5.29808076929, 31.9826964835],
    [0.00000002994, 2.58599359402, 178.086821107],
    [0.00000003905, 1.87748122254, 1158.2819187138],
    [0.0000000311, 3.09203517638, 235.933012687],
    [0.00000003313, 2.70308129756, 604.4725636619],
    [0.00000003276, 1.24440460327, 874.6546428334],
    [0.00000003276, 5.58544609667, 950.920714109],
    [0.00000003746, 0.33859914037, 913.9633346388],
    [0.00000003552, 3.07180917863, 240.3864308119],
    [0.00000002885, 6.01130634957, 1097.514965827],
    [0.00000003643, 5.11977873355, 452.2010535416],
    [0.00000002768, 4.38396269009, 391.4341006548],
    [0.00000002776, 5.0182159483, 8.9068362498],
    [0.0000000299, 5.62911695857, 140.6563608848],
    [0.00000002761, 4.05534163807, 6283.0758499914],
    [0.00000003226, 4.76711354367, 6241.973868937],
    [0.00000003748, 4.84009347869, 341.7340998913],
    [0.00000002752, 4.53621078796, 6206.8097787158],
    [0.00000003847, 2.40982343643, 26086.4186688659],
    [0.00000002727, 3.28234198801, 483.4811746095],
    [0.00000002884, 4.05452029151, 1.2238402774],
    [0.00000002702, 3.72061244391, 946.4672959841],
    [0.00000002723, 4.37517047024, 15.1903018481],
    [0.00000002847, 5.22951186538, 661.0467308547],
    [0.0000000268, 4.19379121323, 13.184564278],
    [0.00000003269, 0.4311977852, 496.9745554282],
    [0.00000003489, 3.82213189319, 625.9945152181],
    [0.00000003757, 3.88223872147, 495.702531041],
    [0.00000002872, 5.00345974886, 252.0865223816],
    [0.00000003742, 2.03372773652, 8.5980197091],
    [0.00000003172, 1.11135762382, 260.9933586314],
    [0.00000003341, 2.91360557418, 304.2342036999],
    [0.00000002915, 2.63627684599, 6681.2248533996],
    [0.00000002915, 1.4377362589, 6604.958782124],
    [0.00000002629, 2.0982440745, 2713.4145640538],
    [0.00000002901, 3.3392480023, 515.463871093],
    [0.00000002803, 1.23584865903, 6643.0918177618],
    [0.00000003045, 3.33515866438, 921.0768816396],
    [0.00000002699, 5.4259779465, 925.2696673336],
    [0.00000002808, 5.77870303237, 1024.217839968],
    [0.00000003028, 3.75501312393, 511.5954083047],
    [0.0000000309, 2.49453093252, 14.6690369863],
    [0.00000002913, 4.83296711477, 515.936951845],
    [0.00000003139, 5.9913425471, 570.7447620392],
    [0.00000002752, 3.08268180744, 853.196381752],
    [0.00000002779, 3.74527347899, 494.0056100116],
    [0.00000002643, 1.99093797444, 470.2172884544],
    [0.00000002763, 4.01095972177, 448.9714756941],
    [0.00000002643, 5.24970673655, 249.9476583675],
    [0.00000003426, 4.73955481174, 1050.9963588012],
    [0.00000002573, 2.01267457287, 1514.2912967165],
    [0.00000002633, 1.63640090603, 170.7126416753],
    [0.00000003034, 4.48979734509, 560.7104537316],
    [0.00000003025, 5.51446170055, 369.4545747116],
    [0.00000003095, 4.01459691667, 1615.8995982268],
    [0.0000000249, 0.15301603966, 78187.44335344699],
    [0.00000002589, 0.79196093766, 1228.9189156969],
    [0.00000003143, 5.33170343283, 1542.3418399369],
    [0.00000003138, 4.50785484172, 461.7622810972],
    [0.00000002812, 3.7424659412, 2.0057375701],
    [0.00000003062, 4.88018345098, 227.9681324243],
    [0.00000002553, 4.85437812287, 488.8496164711],
    [0.00000002971, 1.27359129352, 530.914805372],
    [0.00000002646, 3.64828423565, 335.7749571987],
    [0.00000003329, 2.71693827722, 171.021458216],
    [0.00000002648, 0.60243117586, 70.5888128733],
    [0.00000003061, 5.05044834864, 378.6432952517],
    [0.00000002738, 4.75405645015, 151.260118164],
    [0.00000002728, 5.89052930055, 213.9534867438],
    [0.00000003411, 2.24137878065, 734.4557312983],
    [0.00000002623, 0.54340876464, 1586.1039498672],
    [0.00000003169, 5.84871429991, 1049.5118860929],
    [0.0000000243, 2.34595493263, 450.4559484024],
    [0.00000002907, 5.58085498481, 597.5714649822],
    [0.000000033, 0.94221473935, 58.1705144857],
    [0.00000002543, 5.30426930256, 419.4846438752],
    [0.00000003175, 2.32600231924, 339.2864193365],
    [0.00000002858, 2.36621678719, 32.5039613453],
    [0.00000002712, 5.79983621237, 1587.5884225755],
    [0.0000000334, 1.36950315448, 384.2723695442],
    [0.00000003301, 5.83023910521, 51.7751743028],
    [0.00000002415, 0.6944692367, 489.5521918867],
    [0.00000002736, 5.74320864965, 1167.8431462694],
    [0.00000002956, 5.22962139507, 199.8538987291],
    [0.00000003262, 0.01501002027, 1545.3107853535],
    [0.00000002506, 4.84043333582, 943.4983505675],
    [0.0000000324, 2.46676155925, 1016.7954764265],
    [0.00000003148, 4.62079057738, 233.533516242],
    [0.00000002327, 4.10421417326, 70.1157321213],
    [0.00000002371, 4.79963943424, 271.145287018],
    [0.00000003006, 3.66877796077, 1476.1582610787],
    [0.00000002537, 5.66681769885, 21.1494445407],
    [0.00000003006, 0.9304890948, 21.9795259432],
    [0.00000003033, 0.6715748869, 292.4859280204],
    [0.00000002344, 1.83547256266, 492.3086889822],
    [0.00000003117, 2.76268894894, 1473.1893156621],
    [0.00000002323, 2.88799980853, 533.6231183577],
    [0.0000000234, 4.44862573253, 490.8071699314],
    [0.00000002511, 0.99467349084, 266.1011680621],
    [0.00000002919, 4.75889516601, 1511.3223512999],
    [0.00000002493, 6.10541658597, 1225.9499702803],
    [0.00000002798, 3.06162629894, 419.7452763061],
    [0.00000002691, 3.20679023131, 463.5073862364],
    [0.00000002291, 5.81534758547, 246.9787129509],
    [0.00000002319, 6.0551428147, 525.7588118315],
    [0.00000003112, 0.89712836583, 314.9073969483],
    [0.00000003085, 5.84605938859, 1192.2221686576],
    [0.00000002897, 0.54747024257, 20350.3050211464],
    [0.00000003067, 2.22206306288, 248.4631856592],
    [0.00000002252, 0.87483094907, 61.0275853177],
    [0.00000002392, 3.62837597194, 439.1977998174],
    [0.00000002817, 2.73562306571, 16.6747745564],
    [0.00000002379, 6.17876088396, 467.6519878206],
    [0.00000002598, 4.82643304253, 384.5811860849],
    [0.00000002718, 1.01823841209, 215.9592243139],
    [0.00000002998, 1.097557153, 1964.7472451189],
    [0.00000002884, 2.97813466834, 383.0967133766],
    [0.00000002231, 4.48841493844, 4.1446015842],
    [0.00000002203, 2.23336308907, 481.2629887183],
    [0.0000000226, 2.3540491366, 659.6104422562],
    [0.00000002491, 1.7023635707, 445.3481389717],
    [0.00000003041, 5.55577674116, 674.8007441043],
    [0.00000002289, 1.18497528002, 1552.4243323543],
    [0.00000002975, 0.48272389481, 1052.4808315095],
    [0.00000002339, 0.75318738767, 478.8153081635],
    [0.00000003011, 0.16359500858, 54.2865453324],
    [0.0000000282, 6.18522693724, 556.5176680376],
    [0.00000002266, 5.91286000054, 3.4902102784],
    [0.00000002231, 1.45038594906, 196.5067008026],
];

const R1: &[Term] = &[
    [0.00236338502, 0.70498011235, 38.1330356378],
    [0.00013220279, 3.32015499895, 1.4844727083],
    [0.00008621863, 6.2162895163, 35.1640902212],
    [0.0000270174, 1.88140666779, 39.6175083461],
    [0.0000215315, 5.16873840979, 76.2660712756],
    [0.00002154735, 2.09431198086, 2.9689454166],
    [0.00001463924, 1.18417031047, 33.6796175129],
    [0.00001603165, 0.0, 0.0],
    [0.00001135773, 3.91891199655, 36.6485629295],
    [0.0000089765, 5.24122933533, 388.4651552382],
    [0.00000789908, 0.5331548458, 168.0525127994],
    [0.0000076003, 0.02051033644, 182.279606801],
    [0.00000607183, 1.0770650035, 1021.2488945514],
    [0.00000571622, 3.40060785432, 484.444382456],
    [0.0000056079, 2.88685815667, 498.6714764576],
    [0.0000049019, 3.46830928696, 137.0330241624],
    [0.00000264093, 0.86220057976, 4.4534181249],
    [0.00000270526, 3.27355867939, 71.8126531507],
    [0.00000203524, 2.41820674409, 32.1951448046],
    [0.00000155438, 0.36537064534, 41.1019810544],
    [0.00000132766, 3.60157672619, 9.5612275556],
    [0.00000093626, 0.66670888163, 46.2097904851],
    [0.00000083317, 3.25992461673, 98.8999885246],
    [0.00000072205, 4.47717435693, 601.7642506762],
    [0.00000068983, 1.46326969479, 74.7815985673],
    [0.00000086953, 5.77228651853, 381.3516082374],
    [0.00000068717, 4.52563942435, 70.3281804424],
    [0.00000064724, 3.85477388838, 73.297125859],
    [0.00000068377, 3.39509945953, 108.4612160802],
    [0.00000053375, 5.43650770516, 395.578702239],
    [0.00000044453, 3.61409723545, 2.4476805548],
    [0.00000041243, 4.73866592865, 8.0767548473],
    [0.00000048331, 1.98568593981, 175.1660598002],
    [0.00000041744, 4.94257598763, 31.019488637],
    [0.00000044102, 1.41744904844, 1550.939859646],
    [0.0000004117, 1.41999374753, 490.0734567485],
    [0.00000041099, 4.86312637841, 493.0424021651],
    [0.00000036267, 5.30764043577, 312.1990839626],
    [0.00000036284, 0.38187812797, 77.7505439839],
    [0.00000040619, 2.27237172464, 529.6909650946],
    [0.0000003236, 5.91123007786, 5.9378908332],
    [0.00000031197, 2.70549944134, 1014.1353475506],
    [0.0000003273, 5.22147683115, 41.0537969446],
    [0.00000036079, 4.87817494829, 491.5579294568],
    [0.00000030181, 3.63273193845, 30.7106720963],
    [0.00000029991, 3.30769367603, 1028.3624415522],
    [0.00000027048, 1.77647060739, 44.7253177768],
    [0.00000027756, 4.55583165091, 7.1135470008],
    [0.00000027475, 0.97228280623, 33.9402499438],
    [0.00000024944, 3.10083391185, 144.1465711632],
    [0.00000025958, 2.99724758632, 60.7669528868],
    [0.00000021369, 4.71270048898, 278.2588340188],
    [0.00000021283, 0.68957829113, 251.4321310758],
    [0.00000023727, 5.12044184469, 176.6505325085],
    [0.00000021392, 0.86286397645, 4.192785694],
    [0.00000023373, 1.64955088447, 173.6815870919],
    [0.00000024163, 3.56602004577, 145.1097790097],
    [0.00000020238, 5.61479765982, 24.1183899573],
    [0.00000026958, 4.14294870704, 453.424893819],
    [0.00000024048, 1.00718363213, 213.299095438],
    [0.00000018322, 1.98028683488, 72.0732855816],
    [0.00000018266, 6.17260374467, 189.3931538018],
    [0.00000019201, 4.65162168927, 106.9767433719],
    [0.00000017606, 1.60307551767, 62.2514255951],
    [0.00000016545, 1.69931816587, 357.4456666012],
    [0.00000020132, 3.29520553529, 114.3991069134],
    [0.00000015425, 4.38812302799, 25.6028626656],
    [0.00000019173, 2.20014267311, 343.2185725996],
    [0.00000015077, 3.66802659382, 0.5212648618],
    [0.00000014029, 0.5533633329, 129.9194771616],
    [0.00000013361, 5.8575108372, 68.8437077341],
    [0.00000015357, 4.20731277007, 567.8240007324],
    [0.00000012746, 3.52815836608, 477.3308354552],
    [0.00000011724, 5.5764726346, 31.2319369581],
    [0.00000011533, 0.89138506506, 594.6507036754],
    [0.00000010508, 4.35552732772, 32.7164096664],
    [0.00000010826, 5.21826226871, 26.826702943],
    [0.00000010085, 1.98102855874, 40.5807161926],
    [0.00000010518, 5.27281360238, 2.9207613068],
    [0.00000009207, 0.50092534158, 64.9597385808],
    [0.00000009231, 0.6818097771, 160.9389657986],
    [0.00000008735, 5.80657503476, 6.592282139],
    [0.00000010114, 4.51164596694, 28.5718080822],
    [0.00000010392, 5.18877536013, 42.5864537627],
    [0.00000009873, 3.7651215808, 181.7583419392],
    [0.0000000835, 2.82449631025, 43.2408450685],
    [0.00000009838, 1.494387636, 47.6942631934],
    [0.00000007645, 4.07503370297, 389.9496279465],
    [0.00000008004, 2.78082277326, 505.7850234584],
    [0.0000000744, 2.35731983047, 11.0457002639],
    [0.00000007342, 1.62279119952, 135.5485514541],
    [0.0000000945, 0.27241261915, 426.598190876],
    [0.00000007192, 0.82841201068, 911.042573332],
    [0.00000006979, 1.86753914872, 206.1855484372],
    [0.00000006874, 0.83802906828, 82.8583534146],
    [0.00000007897, 1.86554246391, 38.6543004996],
    [0.00000006729, 3.98338053636, 12.5301729722],
    [0.00000006357, 0.90093123522, 487.3651437628],
    [0.0000000672, 1.339360407, 220.4126424388],
    [0.00000007695, 5.13312500855, 23.9059416362],
    [0.00000007059, 5.99832463494, 639.897286314],
    [0.00000008302, 3.85960902325, 37.611770776],
    [0.00000006412, 2.41743702679, 1059.3819301892],
    [0.00000006751, 1.9686089447, 45.2465826386],
    [0.00000006431, 4.07813226506, 35.685355083],
    [0.00000005517, 3.8132579089, 815.0633461142],
    [0.00000005562, 0.4161960215, 563.6312150384],
    [0.00000006115, 2.10934525342, 697.743477894],
    [0.00000006216, 4.79301628209, 143.6253063014],
    [0.00000005346, 3.13071964722, 386.9806825299],
    [0.00000005245, 6.06245070403, 171.2339065371],
    [0.00000005129, 0.79394555531, 179.0982130633],
    [0.00000005168, 4.73765992885, 522.5774180938],
    [0.00000006422, 0.64684316894, 350.3321196004],
    [0.00000005006, 2.37645082899, 77.2292791221],
    [0.00000005005, 4.70632786971, 460.5384408198],
    [0.00000005167, 5.2024661657, 446.3113468182],
    [0.00000005119, 2.17338058771, 494.7393231945],
    [0.00000005025, 4.21265519856, 536.8045120954],
    [0.00000004722, 6.22814313946, 63.7358983034],
    [0.00000005125, 5.38138329172, 179.3106613844],
    [0.00000004918, 4.09031782903, 488.3765357191],
    [0.00000004652, 5.10765073368, 274.0660483248],
    [0.00000004711, 5.56542374115, 42.3258213318],
    [0.00000004459, 1.3078482983, 69.3649725959],
    [0.00000005485, 3.88088464259, 218.4069048687],
    [0.00000004416, 3.05353893868, 27.0873353739],
    [0.00000004559, 4.92224120952, 285.3723810196],
    [0.00000004393, 4.18047835584, 5.4166259714],
    [0.00000004687, 2.2140115321, 1029.8469142605],
    [0.00000004644, 1.87902594973, 1433.6199914258],
    [0.00000005639, 3.05596737234, 983.1158589136],
    [0.00000006045, 5.68817982786, 351.8165923087],
    [0.0000000443, 3.37768805833, 377.4194549743],
    [0.00000004683, 2.14346624864, 97.4155158163],
    [0.00000005845, 4.62301099402, 1024.217839968],
    [0.00000004536, 2.45860473853, 496.0113475817],
    [0.00000004398, 5.65312496227, 3.9321532631],
    [0.00000004287, 0.66340266603, 1012.6508748423],
    [0.00000004086, 0.14551174994, 385.2837615005],
    [0.00000004029, 5.98399329775, 178.3474535379],
    [0.00000004276, 3.6820508297, 348.8476468921],
    [0.00000005257, 3.75263242432, 379.8671355291],
    [0.00000004012, 0.42559540783, 104313.47953065898],
    [0.00000004025, 2.40645188238, 84.3428261229],
    [0.00000003957, 0.86846121055, 171.9846660625],
    [0.00000003961, 3.04953080906, 1017.3167412883],
    [0.00000005559, 0.77714806229, 1447.8470854274],
    [0.00000005071, 2.61075526868, 1536.7127656444],
    [0.00000004052, 5.00014006312, 391.6465489759],
    [0.00000005182, 4.73444634983, 382.8360809457],
    [0.00000003763, 4.29449373755, 313.6835566709],
    [0.00000004038, 2.82857942788, 1661.1461808654],
    [0.00000004067, 5.7316992896, 169.5369855077],
    [0.00000003841, 1.6258092842, 0.9632078465],
    [0.00000003901, 2.70874386576, 14.0146456805],
    [0.00000003721, 1.20062375429, 1026.8779688439],
    [0.00000003911, 3.01809123569, 100.3844612329],
    [0.00000003489, 4.28865448963, 1025.1810478145],
    [0.00000003714, 5.05021268365, 292.4859280204],
    [0.00000003816, 3.93084933114, 39.0962434843],
    [0.00000003988, 2.82832650224, 134.1122628556],
    [0.00000003745, 4.24728135115, 180.7951340927],
    [0.00000003836, 1.02685786071, 1018.2799491348],
    [0.00000003941, 5.21895739331, 183.7640795093],
    [0.00000004669, 4.38080962573, 1066.49547719],
    [0.0000000378, 6.03723468132, 1022.7333672597],
    [0.00000003647, 3.98130320367, 608.877797677],
    [0.00000003456, 5.54052355058, 846.0828347512],
    [0.00000004047, 3.71041480907, 1018.0675008137],
    [0.00000003865, 4.76002199091, 166.5680400911],
    [0.00000003629, 3.29053233846, 447.7958195265],
    [0.00000003564, 4.36703678321, 397.0631749473],
    [0.00000003304, 1.49289552229, 1505.6932770074],
    [0.00000003976, 2.42476188945, 106.0135355254],
    [0.00000004217, 4.21677652639, 1052.2683831884],
    [0.00000003294, 0.42088065654, 22.633917249],
    [0.00000003615, 3.68096122231, 494.5268748734],
    [0.0000000323, 5.10786091356, 69.1525242748],
    [0.0000000328, 3.62226152032, 531.1754378029],
    [0.00000003337, 2.7250287632, 481.4754370394],
    [0.00000003187, 0.08677634706, 399.5108555021],
    [0.00000003389, 1.79454271219, 1519.920371009],
    [0.00000003179, 3.40418030121, 423.6292454594],
    [0.00000003154, 3.69356460843, 470.2172884544],
    [0.00000003706, 2.79048710497, 462.0229135281],
    [0.00000003136, 4.38015969606, 385.4962098216],
    [0.00000003122, 0.48346644637, 79.1868325824],
    [0.00000003392, 0.48037804731, 521.0929453855],
    [0.00000003465, 0.93152295589, 2183.7235989592],
    [0.00000003735, 0.98809808606, 487.4133278726],
    [0.00000003998, 3.38773325131, 6283.0758499914],
    [0.00000002998, 2.61728063127, 487.6257761937],
    [0.00000003295, 2.53821501556, 4.665866446],
    [0.00000002964, 3.66274645375, 495.4900827199],
    [0.00000003901, 1.65463523144, 210.3301500214],
    [0.0000000295, 1.99904237956, 872.9095376942],
    [0.00000002948, 2.90769224206, 391.4341006548],
    [0.00000002971, 0.31626092637, 5.1078094307],
    [0.00000003085, 0.95725590904, 109.9456887885],
    [0.00000002995, 3.34433305798, 394.0942295307],
    [0.00000003126, 5.89472116854, 105.4922706636],
    [0.00000003904, 3.01022809543, 556.5176680376],
    [0.00000003388, 6.24936444215, 535.3200393871],
    [0.0000000293, 6.15005257333, 164.1203595363],
    [0.00000003267, 4.19718045293, 518.3846323998],
    [0.00000003946, 2.8884275967, 151.260118164],
    [0.00000003076, 6.04134449219, 142.1408335931],
    [0.00000002823, 0.60712626756, 214.7835681463],
    [0.00000002917, 2.74502617182, 138.5174968707],
    [0.00000003347, 6.09373507569, 6246.4272870619],
    [0.00000003659, 5.12211619716, 79.2350166922],
    [0.0000000301, 0.24656411754, 91.7864415238],
    [0.00000002861, 6.17465663902, 422.405405182],
    [0.00000002989, 2.31620917965, 485.9288551643],
    [0.00000003088, 2.29186342974, 110.2063212194],
    [0.0000000303, 3.698661491, 532.6117264014],
    [0.0000000302, 2.36422658177, 290.2195580194],
    [0.0000000317, 1.23078934548, 10176.6369832815],
    [0.00000002652, 3.35836234807, 148.0787244263],
    [0.00000002673, 6.03366372927, 196.5067008026],
    [0.0000000263, 0.46957619348, 1970.4245035212],
    [0.00000002599, 4.86022081674, 439.1977998174],
    [0.00000002878, 2.61946597178, 488.5889840402],
    [0.0000000272, 1.71836225398, 364.559213602],
    [0.00000003333, 3.25126857354, 30.0562807905],
    [0.00000003053, 2.49346960035, 6243.4583416453],
    [0.00000003062, 6.23776299963, 419.4846438752],
    [0.00000002786, 0.83078219939, 497.1870037493],
    [0.00000002834, 3.52926079424, 457.8783119439],
    [0.00000002932, 1.80245810977, 500.1559491659],
    [0.0000000303, 5.10152500393, 367.9701020033],
    [0.00000002956, 5.76230870725, 986.0848043302],
    [0.00000003116, 2.20042242739, 495.702531041],
    [0.00000002554, 0.65945973992, 67.3592350258],
    [0.00000002901, 3.91891656185, 10173.6680378649],
    [0.0000000284, 1.34453183591, 482.9599097477],
    [0.00000002458, 1.20012815574, 489.110248902],
    [0.00000002556, 3.86921927085, 487.1045113319],
    [0.00000002614, 1.51881085312, 463.5073862364],
    [0.00000002386, 4.58400538443, 615.9913446778],
    [0.00000002438, 5.19827220476, 501.1191570124],
    [0.00000002537, 1.64802783144, 519.6084726772],
    [0.00000002444, 3.87859489652, 185.2485522176],
    [0.00000002795, 4.0426575258, 255.0554677982],
    [0.00000002895, 3.26202698812, 1646.9190868638],
    [0.00000002225, 5.75197574692, 605.9570363702],
    [0.00000002324, 3.99503920129, 481.2629887183],
    [0.00000002962, 1.74151265966, 2080.6308247406],
    [0.00000002621, 1.74442251671, 35.212274331],
];

const R2: &[Term] = &[
    [0.00004247412, 5.89910679117, 38.1330356378],
    [0.0000021757, 0.3458182908, 1.4844727083],
    [0.00000163025, 2.2387294713, 168.0525127994],
    [0.00000156285, 4.59414467342, 182.279606801],
    [0.0000011794, 5.10295026024, 484.444382456],
    [0.00000112429, 1.19000583596, 498.6714764576],
    [0.00000127141, 2.84786298079, 35.1640902212],
    [0.00000099467, 3.41578558739, 175.1660598002],
    [0.00000064814, 3.4621406484, 388.4651552382],
    [0.00000077286, 0.01659281785, 491.5579294568],
    [0.00000049509, 4.06995509133, 76.2660712756],
    [0.0000003933, 6.09521855958, 1021.2488945514],
    [0.0000003645, 5.17130059988, 137.0330241624],
    [0.0000003708, 5.97288967681, 2.9689454166],
    [0.00000030484, 3.58259801313, 33.6796175129],
    [0.00000021099, 0.76843555176, 36.6485629295],
    [0.00000013886, 3.59248623971, 395.578702239],
    [0.00000013117, 5.09263515697, 98.8999885246],
    [0.00000011379, 1.18060018898, 381.3516082374],
    [0.00000009132, 2.34787658568, 601.7642506762],
    [0.00000008527, 5.25134685897, 2.4476805548],
    [0.00000008136, 4.96270726986, 4.4534181249],
    [0.00000007417, 4.46775409796, 189.3931538018],
    [0.00000007225, 1.92287508629, 9.5612275556],
    [0.00000007289, 1.6551952578, 1028.3624415522],
    [0.00000008076, 5.84268048311, 220.4126424388],
    [0.00000009654, 0.0, 0.0],
    [0.00000006554, 0.69397520733, 144.1465711632],
    [0.00000007782, 1.14341656235, 1059.3819301892],
    [0.00000005665, 6.25378258571, 74.7815985673],
    [0.00000005628, 5.23383764266, 46.2097904851],
    [0.00000005523, 4.59041448911, 1014.1353475506],
    [0.00000005177, 5.23116646157, 477.3308354552],
    [0.00000005503, 3.49522319102, 183.7640795093],
    [0.00000004878, 3.52934357721, 39.6175083461],
    [0.00000004787, 2.08260524745, 41.1019810544],
    [0.00000005055, 0.19949888617, 166.5680400911],
    [0.00000004751, 1.1805494827, 169.5369855077],
    [0.00000004747, 1.50608965076, 73.297125859],
    [0.00000006113, 6.18326155595, 71.8126531507],
    [0.00000004606, 3.91970908886, 587.5371566746],
    [0.00000005756, 2.23667359233, 176.6505325085],
    [0.00000004536, 2.84337336954, 7.1135470008],
    [0.00000004338, 0.51553847388, 446.3113468182],
    [0.00000003891, 0.26338839265, 1550.939859646],
    [0.00000004465, 3.01487041298, 129.9194771616],
    [0.00000003727, 2.37977930658, 160.9389657986],
    [0.0000000384, 3.7929038188, 111.4301614968],
    [0.00000004142, 1.70293820961, 983.1158589136],
    [0.00000003296, 1.07748822909, 505.7850234584],
    [0.00000004008, 0.30663868827, 494.7393231945],
    [0.00000003974, 5.9735178384, 488.3765357191],
    [0.00000003925, 4.85736421123, 60.7669528868],
    [0.00000002966, 2.01608546009, 822.176893115],
    [0.00000003972, 1.07780371834, 374.2380612366],
    [0.00000003843, 5.23002047199, 350.3321196004],
    [0.00000002848, 6.17799253802, 704.8570248948],
    [0.00000003527, 0.79317138165, 274.0660483248],
    [0.00000002828, 1.32275775835, 386.9806825299],
    [0.00000002773, 5.37132330836, 251.4321310758],
    [0.00000003113, 5.1262228869, 426.598190876],
    [0.00000003344, 5.61433537548, 1124.34166877],
    [0.00000002597, 0.67759426519, 312.1990839626],
    [0.00000002581, 3.55847612121, 567.8240007324],
    [0.00000002578, 1.45603792456, 1035.475988553],
    [0.00000002541, 5.19427579702, 1227.4344429886],
    [0.0000000251, 4.12148891512, 171.2339065371],
    [0.00000002511, 2.71606957319, 179.0982130633],
    [0.00000002342, 0.96469916587, 1019.7644218431],
    [0.000000025, 0.7028227603, 707.7777862016],
    [0.0000000248, 4.59623030219, 693.5506922],
    [0.00000002253, 0.74334306011, 976.0023119128],
];

const R3: &[Term] = &[
    [0.00000166297, 4.55243893489, 38.1330356378],
    [0.0000002238, 3.94830879358, 168.0525127994],
    [0.00000021348, 2.86296778794, 182.279606801],
    [0.00000016233, 0.54226725872, 484.444382456],
    [0.00000015623, 5.75702251906, 498.6714764576],
    [0.00000011867, 4.4028019271, 1.4844727083],
    [0.00000006448, 5.19003066847, 31.019488637],
    [0.00000003655, 5.91335292846, 1007.0218005498],
    [0.00000003681, 1.62865545676, 388.4651552382],
    [0.00000003198, 0.70197118575, 1558.0534066468],
    [0.00000003243, 1.8803566598, 522.5774180938],
    [0.00000003269, 2.94301808574, 76.2660712756],
    [0.00000002688, 1.87062743473, 402.6922492398],
    [0.00000003246, 0.79381356193, 536.8045120954],
    [0.0000000265, 5.76858449026, 343.2185725996],
    [0.00000002644, 4.64542905401, 500.1559491659],
    [0.00000002541, 4.79217120822, 482.9599097477],
    [0.00000002523, 1.7286988978, 395.578702239],
    [0.0000000269, 2.21096415618, 446.3113468182],
    [0.00000002355, 5.77381398401, 485.9288551643],
    [0.00000002874, 6.1964334054, 815.0633461142],
    [0.00000002278, 3.66579603119, 497.1870037493],
];

pub static NEPTUNE: Vsop87Table = Vsop87Table {
    variables: Variables::Spherical,
    reference: Reference::EclipticOfDate,
    series: [
        &[L0, L1, L2, L3, L4, L5],
        &[B0, B1, B2, B3, B4, B5],
        &[R0, R1, R2, R3],
    ],
};
